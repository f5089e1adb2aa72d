//! Built-in skill taxonomy data.
//!
//! Variants deliberately exclude words that double as common English
//! ("go", "express", "rest" alone) — a false skill detection poisons both
//! depth scoring and readiness matching downstream.

use super::{SkillCategory, SkillEntry};

fn entry(name: &str, variants: &[&str]) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
    }
}

fn category(name: &str, skills: Vec<SkillEntry>) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills,
    }
}

pub(super) fn builtin_categories() -> Vec<SkillCategory> {
    vec![
        category(
            "Programming",
            vec![
                entry("Python", &["python"]),
                entry("Java", &["java", "j2ee"]),
                entry("JavaScript", &["javascript", "js", "ecmascript"]),
                entry("TypeScript", &["typescript", "ts"]),
                entry("C++", &["c++", "cpp"]),
                entry("C#", &["c#", "csharp"]),
                entry("Go", &["golang"]),
                entry("Rust", &["rust"]),
                entry("PHP", &["php"]),
                entry("Ruby", &["ruby"]),
                entry("Swift", &["swift"]),
                entry("Kotlin", &["kotlin"]),
                entry("R", &["r language", "r programming", "rstudio"]),
                entry("Scala", &["scala"]),
            ],
        ),
        category(
            "Web Development",
            vec![
                entry("HTML", &["html", "html5"]),
                entry("CSS", &["css", "css3", "scss"]),
                entry("React", &["react", "react.js", "reactjs"]),
                entry("Vue", &["vue", "vue.js", "vuejs"]),
                entry("Angular", &["angular", "angularjs"]),
                entry("Node.js", &["node.js", "nodejs"]),
                entry("Express", &["express.js", "expressjs"]),
                entry("Django", &["django"]),
                entry("Flask", &["flask"]),
                entry("ASP.NET", &["asp.net", "aspnet"]),
                entry("GraphQL", &["graphql"]),
                entry("REST API", &["rest api", "restful"]),
                entry("WebSockets", &["websocket", "websockets"]),
            ],
        ),
        category(
            "Data & Analytics",
            vec![
                entry("SQL", &["sql"]),
                entry("Pandas", &["pandas"]),
                entry("NumPy", &["numpy"]),
                entry("Matplotlib", &["matplotlib"]),
                entry("Tableau", &["tableau"]),
                entry("Power BI", &["power bi", "powerbi"]),
                entry("Excel", &["excel", "vba"]),
                entry("Spark", &["pyspark", "apache spark"]),
                entry("Hadoop", &["hadoop"]),
                entry("Kafka", &["kafka"]),
            ],
        ),
        category(
            "Cloud & DevOps",
            vec![
                entry("AWS", &["aws", "amazon web services", "ec2", "lambda"]),
                entry("Azure", &["azure", "microsoft azure"]),
                entry("GCP", &["gcp", "google cloud"]),
                entry("Docker", &["docker"]),
                entry("Kubernetes", &["kubernetes", "k8s"]),
                entry("Jenkins", &["jenkins"]),
                entry(
                    "CI/CD",
                    &["ci/cd", "continuous integration", "continuous deployment"],
                ),
                entry("Linux", &["linux", "unix"]),
                entry("Git", &["git", "github", "gitlab", "bitbucket"]),
                entry("Terraform", &["terraform"]),
                entry("Ansible", &["ansible"]),
            ],
        ),
        category(
            "ML & AI",
            vec![
                entry("Machine Learning", &["machine learning", "ml"]),
                entry("Deep Learning", &["deep learning"]),
                entry("NLP", &["nlp", "natural language processing"]),
                entry("Computer Vision", &["computer vision"]),
                entry("TensorFlow", &["tensorflow"]),
                entry("PyTorch", &["pytorch"]),
                entry("Keras", &["keras"]),
                entry("Scikit-learn", &["scikit-learn", "sklearn"]),
                entry("LLM", &["llm", "large language model"]),
            ],
        ),
        category(
            "Databases",
            vec![
                entry("MySQL", &["mysql"]),
                entry("PostgreSQL", &["postgresql", "postgres", "psql"]),
                entry("MongoDB", &["mongodb", "mongo"]),
                entry("Redis", &["redis"]),
                entry("Cassandra", &["cassandra"]),
                entry("DynamoDB", &["dynamodb"]),
                entry("Elasticsearch", &["elasticsearch"]),
                entry("SQLite", &["sqlite"]),
            ],
        ),
        category(
            "Soft Skills",
            vec![
                entry("Leadership", &["leadership", "team lead", "led team"]),
                entry("Communication", &["communication"]),
                entry("Project Management", &["project management"]),
                entry("Agile", &["agile", "scrum"]),
                entry("Problem Solving", &["problem solving", "problem-solving"]),
                entry("Teamwork", &["teamwork", "collaboration"]),
                entry("Critical Thinking", &["critical thinking", "analytical"]),
            ],
        ),
    ]
}
