//! Built-in field configurations.
//!
//! Keyword matching downstream is substring-based, so keywords shorter than
//! three characters ("r", "pr") are excluded — they match almost any text.

use super::{
    ExperienceExpectations, FieldCategory, FieldConfig, FieldKey, ResumeSection,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn expectations(entry: &[&str], mid: &[&str], senior: &[&str]) -> ExperienceExpectations {
    ExperienceExpectations {
        entry: strings(entry),
        mid: strings(mid),
        senior: strings(senior),
    }
}

pub(super) fn builtin_configs() -> Vec<(FieldKey, FieldConfig)> {
    vec![
        (FieldKey::SoftwareBackend, software_backend()),
        (FieldKey::SoftwareFrontend, software_frontend()),
        (FieldKey::DataScience, data_science()),
        (FieldKey::ProductManagement, product_management()),
        (FieldKey::UxUiDesign, ux_ui_design()),
        (FieldKey::Marketing, marketing()),
    ]
}

fn software_backend() -> FieldConfig {
    FieldConfig {
        name: "Software Engineering (Backend)".to_string(),
        category: FieldCategory::Software,
        core_keywords: strings(&[
            // Languages
            "python", "java", "go", "c++", "c#", "rust", "scala", "kotlin",
            // Frameworks
            "django", "flask", "spring", "express", "fastapi", "node.js",
            // Databases
            "sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
            // Systems
            "api", "rest", "graphql", "microservices", "distributed systems",
            // Cloud & DevOps
            "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd",
            // Practices
            "git", "testing", "agile", "code review", "system design",
        ]),
        supporting_keywords: strings(&[
            "linux", "bash", "nginx", "rabbitmq", "kafka", "grpc",
            "terraform", "jenkins", "github actions", "monitoring",
            "logging", "security", "authentication", "authorization",
        ]),
        required_sections: vec![
            ResumeSection::Experience,
            ResumeSection::Skills,
            ResumeSection::Education,
        ],
        impact_metrics: strings(&[
            "requests per second", "latency", "throughput", "uptime",
            "users", "scale", "performance improvement", "cost reduction",
            "deployment frequency", "bug reduction", "test coverage",
        ]),
        red_flags: strings(&[
            "no version control mentioned",
            "no testing experience",
            "only tutorial projects",
            "no production experience (for mid-level+)",
        ]),
        expectations: expectations(
            &[
                "personal or academic projects",
                "internship experience",
                "foundational programming skills",
                "basic understanding of databases and APIs",
            ],
            &[
                "production system experience",
                "API design and implementation",
                "database optimization",
                "cross-team collaboration",
                "code review participation",
            ],
            &[
                "system architecture decisions",
                "technical leadership",
                "mentoring junior engineers",
                "scalability and performance optimization",
                "cross-functional project leadership",
            ],
        ),
    }
}

fn software_frontend() -> FieldConfig {
    FieldConfig {
        name: "Software Engineering (Frontend)".to_string(),
        category: FieldCategory::Software,
        core_keywords: strings(&[
            "javascript", "typescript", "react", "vue", "angular", "html", "css",
            "responsive design", "webpack", "babel", "npm", "yarn",
            "redux", "state management", "component design", "accessibility",
            "performance optimization", "cross-browser", "mobile-first",
        ]),
        supporting_keywords: strings(&[
            "sass", "less", "tailwind", "styled-components", "jest", "cypress",
            "storybook", "figma", "design systems", "seo", "pwa",
            "graphql", "rest api", "websockets", "animation",
        ]),
        required_sections: vec![
            ResumeSection::Experience,
            ResumeSection::Skills,
            ResumeSection::Projects,
        ],
        impact_metrics: strings(&[
            "page load time", "lighthouse score", "conversion rate",
            "user engagement", "accessibility score", "bundle size",
            "render time", "user satisfaction",
        ]),
        red_flags: strings(&[
            "no modern framework experience",
            "no responsive design mention",
            "no accessibility awareness",
            "outdated jquery-only experience",
        ]),
        expectations: expectations(
            &[
                "portfolio of projects",
                "modern framework knowledge",
                "responsive design implementation",
                "basic JavaScript proficiency",
            ],
            &[
                "production application development",
                "state management expertise",
                "performance optimization",
                "cross-browser compatibility",
                "component library development",
            ],
            &[
                "architecture decisions",
                "design system creation",
                "technical leadership",
                "performance strategy",
                "mentoring and code quality advocacy",
            ],
        ),
    }
}

fn data_science() -> FieldConfig {
    FieldConfig {
        name: "Data Science / Machine Learning".to_string(),
        category: FieldCategory::DataScience,
        core_keywords: strings(&[
            "python", "sql", "machine learning", "statistics",
            "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch",
            "data analysis", "data visualization", "feature engineering",
            "model training", "model evaluation", "a/b testing",
            "regression", "classification", "clustering", "nlp", "computer vision",
        ]),
        supporting_keywords: strings(&[
            "jupyter", "spark", "hadoop", "airflow", "mlflow", "kubeflow",
            "tableau", "power bi", "matplotlib", "seaborn", "plotly",
            "aws sagemaker", "azure ml", "deep learning", "neural networks",
            "xgboost", "random forest",
        ]),
        required_sections: vec![
            ResumeSection::Experience,
            ResumeSection::Skills,
            ResumeSection::Education,
            ResumeSection::Projects,
        ],
        impact_metrics: strings(&[
            "model accuracy", "precision", "recall", "auc", "f1 score",
            "revenue impact", "cost savings", "efficiency improvement",
            "prediction improvement", "data volume processed",
            "inference latency", "model deployment success",
        ]),
        red_flags: strings(&[
            "no statistical foundation",
            "no production model experience (for mid-level+)",
            "only kaggle competitions",
            "no business impact metrics",
        ]),
        expectations: expectations(
            &[
                "academic or personal ML projects",
                "statistical analysis experience",
                "data cleaning and preprocessing",
                "basic model training and evaluation",
            ],
            &[
                "production model deployment",
                "end-to-end ML pipeline development",
                "feature engineering expertise",
                "model monitoring and maintenance",
                "cross-functional collaboration",
            ],
            &[
                "ML strategy and architecture",
                "team leadership",
                "business impact focus",
                "research to production pipeline",
                "mentoring data scientists",
            ],
        ),
    }
}

fn product_management() -> FieldConfig {
    FieldConfig {
        name: "Product Management".to_string(),
        category: FieldCategory::Product,
        core_keywords: strings(&[
            "product strategy", "roadmap", "prioritization", "user research",
            "stakeholder management", "product requirements", "prd",
            "user stories", "agile", "scrum", "kpis", "okrs",
            "a/b testing", "analytics", "user experience", "market research",
            "competitive analysis", "go-to-market", "product launch",
        ]),
        supporting_keywords: strings(&[
            "jira", "confluence", "figma", "sql", "google analytics",
            "mixpanel", "amplitude", "wireframing", "prototyping",
            "customer interviews", "usability testing", "mvp",
            "product-market fit", "growth", "retention", "engagement",
        ]),
        required_sections: vec![ResumeSection::Experience, ResumeSection::Skills],
        impact_metrics: strings(&[
            "user growth", "dau", "mau", "retention rate", "engagement",
            "conversion rate", "revenue growth", "market share",
            "customer satisfaction", "nps", "feature adoption",
            "time to market", "churn reduction",
        ]),
        red_flags: strings(&[
            "no quantified impact",
            "no cross-functional leadership",
            "no user research experience",
            "purely technical focus (for pm role)",
        ]),
        expectations: expectations(
            &[
                "product internship or associate role",
                "user research participation",
                "data analysis skills",
                "cross-functional project experience",
            ],
            &[
                "end-to-end product ownership",
                "successful product launches",
                "stakeholder management",
                "data-driven decision making",
                "roadmap development",
            ],
            &[
                "product strategy development",
                "team leadership",
                "business model innovation",
                "market expansion",
                "executive stakeholder management",
            ],
        ),
    }
}

fn ux_ui_design() -> FieldConfig {
    FieldConfig {
        name: "UX/UI Design".to_string(),
        category: FieldCategory::Design,
        core_keywords: strings(&[
            "user research", "wireframing", "prototyping", "usability testing",
            "user interface", "user experience", "interaction design",
            "figma", "sketch", "adobe xd", "invision",
            "design systems", "accessibility", "responsive design",
            "user flows", "information architecture", "visual design",
            "design thinking", "user-centered design",
        ]),
        supporting_keywords: strings(&[
            "html", "css", "javascript", "framer", "after effects",
            "illustrator", "photoshop", "user personas", "journey mapping",
            "card sorting", "tree testing", "heuristic evaluation",
            "a/b testing", "analytics", "design sprints",
        ]),
        // "Portfolio" headers resolve to the projects section.
        required_sections: vec![
            ResumeSection::Experience,
            ResumeSection::Skills,
            ResumeSection::Projects,
        ],
        impact_metrics: strings(&[
            "user satisfaction", "task completion rate", "error reduction",
            "time on task", "conversion improvement", "engagement increase",
            "accessibility score", "usability score", "design system adoption",
        ]),
        red_flags: strings(&[
            "no portfolio link",
            "no user research experience",
            "only visual design (no ux)",
            "no usability testing mentioned",
        ]),
        expectations: expectations(
            &[
                "strong portfolio",
                "design tool proficiency",
                "user research participation",
                "basic prototyping skills",
            ],
            &[
                "end-to-end design ownership",
                "user research leadership",
                "design system contribution",
                "cross-functional collaboration",
                "usability testing expertise",
            ],
            &[
                "design strategy",
                "team leadership",
                "design system architecture",
                "stakeholder management",
                "design culture building",
            ],
        ),
    }
}

fn marketing() -> FieldConfig {
    FieldConfig {
        name: "Marketing".to_string(),
        category: FieldCategory::Marketing,
        core_keywords: strings(&[
            "marketing strategy", "campaign management", "content marketing",
            "seo", "sem", "social media", "email marketing", "paid advertising",
            "google analytics", "google ads", "facebook ads", "linkedin ads",
            "marketing automation", "lead generation", "conversion optimization",
            "brand management", "content strategy", "copywriting",
            "marketing analytics", "roi", "cac", "ltv",
        ]),
        supporting_keywords: strings(&[
            "hubspot", "salesforce", "mailchimp", "hootsuite", "semrush",
            "ahrefs", "google tag manager", "wordpress", "shopify",
            "a/b testing", "landing pages", "crm", "marketing funnel",
            "influencer marketing", "affiliate marketing",
        ]),
        required_sections: vec![ResumeSection::Experience, ResumeSection::Skills],
        impact_metrics: strings(&[
            "revenue growth", "lead generation", "conversion rate",
            "roi", "roas", "cac", "ltv", "engagement rate",
            "traffic growth", "email open rate", "click-through rate",
            "brand awareness", "market share", "customer acquisition",
        ]),
        red_flags: strings(&[
            "no quantified results",
            "no digital marketing experience",
            "no analytics skills",
            "vague campaign descriptions",
        ]),
        expectations: expectations(
            &[
                "campaign execution experience",
                "content creation skills",
                "social media management",
                "basic analytics knowledge",
            ],
            &[
                "campaign strategy and ownership",
                "multi-channel marketing",
                "data-driven optimization",
                "budget management",
                "cross-functional collaboration",
            ],
            &[
                "marketing strategy development",
                "team leadership",
                "brand positioning",
                "market expansion",
                "executive reporting",
            ],
        ),
    }
}
