//! Built-in role ladders and skill requirements.

use super::MarketDemand::{High, Low, Medium, VeryHigh};
use super::{Interest, MarketDemand, RoleLadder, SkillRequirements};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ladder(
    interest: Interest,
    rungs: [(&str, u32, MarketDemand); 5],
    core: &[&str],
    supporting: &[&str],
    optional: &[&str],
) -> RoleLadder {
    RoleLadder {
        interest,
        rungs: rungs
            .iter()
            .map(|(role, months, demand)| (role.to_string(), *months, *demand))
            .collect(),
        skills: SkillRequirements {
            core: strings(core),
            supporting: strings(supporting),
            optional: strings(optional),
        },
    }
}

pub(super) fn builtin_ladders() -> Vec<RoleLadder> {
    vec![
        ladder(
            Interest::Backend,
            [
                ("Junior Backend Engineer", 3, High),
                ("Backend Engineer", 6, VeryHigh),
                ("Senior Backend Engineer", 12, VeryHigh),
                ("Staff Backend Engineer", 18, High),
                ("Backend Engineering Manager", 24, Medium),
            ],
            &["Python", "Go", "Java", "Node.js", "Databases", "API Design", "System Design"],
            &["Docker", "CI/CD", "SQL Optimization", "Caching"],
            &["Kubernetes", "Message Queues"],
        ),
        ladder(
            Interest::Frontend,
            [
                ("Junior Frontend Engineer", 3, High),
                ("Frontend Engineer", 6, VeryHigh),
                ("Senior Frontend Engineer", 12, High),
                ("Staff Frontend Engineer", 18, Medium),
                ("Frontend Engineering Manager", 24, Medium),
            ],
            &["JavaScript", "React", "CSS", "HTML", "State Management", "Responsive Design"],
            &["TypeScript", "Testing", "Performance Optimization", "Accessibility"],
            &["Vue", "Svelte", "Web Animation"],
        ),
        ladder(
            Interest::Fullstack,
            [
                ("Junior Full-Stack Engineer", 4, High),
                ("Full-Stack Engineer", 8, VeryHigh),
                ("Senior Full-Stack Engineer", 14, High),
                ("Staff Full-Stack Engineer", 20, Medium),
                ("Engineering Manager", 24, Medium),
            ],
            &["JavaScript/TypeScript", "Frontend Framework", "Backend Language", "Database", "APIs"],
            &["Docker", "Version Control", "Testing", "Deployment"],
            &["Cloud Platforms", "Microservices"],
        ),
        ladder(
            Interest::Ml,
            [
                ("ML Engineer Intern", 4, High),
                ("ML Engineer", 8, VeryHigh),
                ("Senior ML Engineer", 14, VeryHigh),
                ("Staff ML Engineer", 20, High),
                ("ML Engineering Manager", 24, Medium),
            ],
            &["Python", "TensorFlow", "PyTorch", "Statistics", "Data Structures"],
            &["Scikit-learn", "Feature Engineering", "Model Evaluation", "SQL"],
            &["Distributed Training", "MLOps Basics"],
        ),
        ladder(
            Interest::Nlp,
            [
                ("NLP Engineer Intern", 5, High),
                ("NLP Engineer", 9, High),
                ("Senior NLP Engineer", 15, High),
                ("Staff NLP Engineer", 20, Medium),
                ("NLP Engineering Manager", 24, Low),
            ],
            &["Python", "NLP Frameworks", "Transformers", "Deep Learning", "Statistics"],
            &["NLTK", "Spacy", "Text Preprocessing", "Language Models"],
            &["Prompt Engineering", "Fine-tuning"],
        ),
        ladder(
            Interest::Data,
            [
                ("Data Analyst", 4, High),
                ("Junior Data Scientist", 6, VeryHigh),
                ("Data Scientist", 12, High),
                ("Senior Data Scientist", 18, Medium),
                ("Data Science Manager", 24, Medium),
            ],
            &["Python", "SQL", "Statistics", "Data Analysis", "Pandas", "NumPy"],
            &["Scikit-learn", "Visualization", "A/B Testing", "Machine Learning"],
            &["Deep Learning", "Big Data Platforms"],
        ),
        ladder(
            Interest::Ai,
            [
                ("AI Engineer Intern", 5, High),
                ("AI Engineer", 8, VeryHigh),
                ("Senior AI Engineer", 14, VeryHigh),
                ("Staff AI Engineer", 20, High),
                ("AI Engineering Manager", 24, Medium),
            ],
            &["Python", "Machine Learning", "Deep Learning", "System Design", "Statistics"],
            &["Large Language Models", "Vector Databases", "Prompt Engineering"],
            &["Reinforcement Learning", "Computer Vision"],
        ),
        ladder(
            Interest::Mlops,
            [
                ("MLOps Engineer Intern", 4, High),
                ("MLOps Engineer", 8, VeryHigh),
                ("Senior MLOps Engineer", 14, High),
                ("Staff MLOps Engineer", 20, Medium),
                ("MLOps Engineering Manager", 24, Low),
            ],
            &["Python", "Docker", "Kubernetes", "CI/CD", "ML Frameworks"],
            &["Cloud Platforms", "Monitoring", "Model Registry", "Infrastructure"],
            &["Terraform", "Advanced Kubernetes"],
        ),
        ladder(
            Interest::DataEngineering,
            [
                ("Data Engineering Intern", 4, High),
                ("Data Engineer", 8, VeryHigh),
                ("Senior Data Engineer", 14, High),
                ("Staff Data Engineer", 20, Medium),
                ("Data Engineering Manager", 24, Medium),
            ],
            &["SQL", "Python", "Data Pipelines", "ETL", "Databases"],
            &["Spark", "Hadoop", "Cloud Data", "Schema Design"],
            &["Stream Processing", "Data Lakes"],
        ),
        ladder(
            Interest::Design,
            [
                ("Junior Product Designer", 4, High),
                ("Product Designer", 8, High),
                ("Senior Product Designer", 12, High),
                ("Lead Designer", 18, Medium),
                ("Design Manager", 24, Low),
            ],
            &["Figma", "User Research", "Wireframing", "Prototyping", "Visual Design"],
            &["Usability Testing", "Design Systems", "UI Design", "Interaction Design"],
            &["Animation", "Video Editing"],
        ),
        ladder(
            Interest::Product,
            [
                ("Associate Product Manager", 3, High),
                ("Product Manager", 6, VeryHigh),
                ("Senior Product Manager", 12, High),
                ("Principal Product Manager", 18, Medium),
                ("Director of Product", 24, Low),
            ],
            &["Product Strategy", "Analytics", "User Understanding", "Roadmap Planning"],
            &["Data Analysis", "Communication", "Project Management", "Metrics"],
            &["Financial Modeling", "Technical Depth"],
        ),
    ]
}
