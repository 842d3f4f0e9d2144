//! Built-in taxonomy. Order matters: roles are matched in insertion order and
//! hard skills are injected in taxonomy order.

use crate::lexicon::{CareerLevel, LexiconData, RoleProfile, SectionHeaders, SkillCategory};
use crate::models::resume::Section;

const HARD_SKILLS: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "C", "Go", "Rust", "Kotlin",
    "Swift", "Dart", "Ruby", "PHP", "Scala", "R", "SQL", "HTML", "CSS", "React", "Angular",
    "Vue", "Redux", "Next.js", "Node.js", "Express", "Django", "Flask", "Spring Boot",
    "GraphQL", "REST APIs", "Microservices", "Tailwind", "Bootstrap", "Flutter",
    "React Native", "Android", "iOS", "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite",
    "Firebase", "DynamoDB", "Cassandra", "Docker", "Kubernetes", "AWS", "Azure", "GCP",
    "Terraform", "Ansible", "Jenkins", "CI/CD", "Linux", "Bash", "Git", "Kafka", "Spark",
    "Hadoop", "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "TensorFlow",
    "PyTorch", "Scikit-learn", "Pandas", "NumPy", "Statistics", "Data Visualization",
    "Tableau", "Power BI", "Excel", "Data Structures", "Algorithms", "System Design",
    "Selenium", "Cypress", "JUnit", "Test Automation", "Figma", "Adobe XD", "Wireframing",
    "Prototyping", "User Research", "Network Security", "Penetration Testing", "SIEM",
    "Cryptography", "Agile", "Scrum", "Jira", "MLOps", "Serverless",
];

const SOFT_SKILLS: &[&str] = &[
    "Communication", "Teamwork", "Leadership", "Problem Solving", "Collaboration",
    "Time Management", "Adaptability", "Critical Thinking", "Creativity",
    "Attention to Detail", "Analytical Thinking", "Stakeholder Management",
    "Decision Making", "Empathy", "Curiosity", "Interpersonal Skills", "Work Ethic",
    "Mentoring",
];

const STRONG_VERBS: &[&str] = &[
    "Achieved", "Analyzed", "Architected", "Automated", "Built", "Collaborated",
    "Coordinated", "Created", "Delivered", "Deployed", "Designed", "Developed",
    "Engineered", "Established", "Executed", "Implemented", "Improved", "Increased",
    "Integrated", "Launched", "Led", "Managed", "Mentored", "Optimized", "Organized",
    "Reduced", "Resolved", "Spearheaded", "Streamlined", "Trained",
];

const WEAK_VERBS: &[&str] = &[
    "helped", "worked on", "responsible for", "assisted", "participated in", "involved in",
    "handled", "tried",
];

const MISSPELLINGS: &[&str] = &[
    "teh", "recieve", "recieved", "acheive", "acheived", "achivement", "managment",
    "experiance", "responsibilty", "sucessful", "succesful", "occured", "seperate",
    "definately", "enviroment", "developement", "knowlege", "comunication", "begining",
    "untill", "wich", "thier", "langauge", "proficent", "profesional",
];

const UNPROFESSIONAL_EMAIL_TERMS: &[&str] = &[
    "sexy", "babe", "baby", "princess", "gamer", "xxx", "cutie", "rockstar", "ninja",
    "dude", "party", "killer", "crazy", "swag", "hottie", "lol",
];

const TITLE_KEYWORDS: &[&str] = &["engineer", "developer", "manager", "analyst", "architect"];

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "c", "go", "golang",
            "rust", "kotlin", "swift", "dart", "ruby", "php", "scala", "r", "matlab", "bash",
        ],
    ),
    (
        "Web Technologies",
        &[
            "html", "css", "react", "angular", "vue", "redux", "next", "node", "express",
            "django", "flask", "spring", "graphql", "rest", "tailwind", "bootstrap", "jquery",
        ],
    ),
    (
        "Databases",
        &[
            "sql", "mongodb", "postgres", "sqlite", "oracle", "redis", "firebase", "dynamodb",
            "cassandra", "database",
        ],
    ),
    (
        "Tools & Frameworks",
        &[
            "git", "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "linux",
            "terraform", "tensorflow", "pytorch", "scikit", "pandas", "numpy", "figma", "jira",
            "tableau", "power bi", "excel", "machine learning", "deep learning", "selenium",
            "flutter", "android", "ios", "kafka", "spark",
        ],
    ),
    (
        "Soft Skills",
        &[
            "communication", "teamwork", "leadership", "problem solving", "collaboration",
            "time management", "adaptability", "critical thinking", "creativity",
            "attention to detail", "analytical", "empathy", "mentoring", "interpersonal",
        ],
    ),
];

const SECTION_HEADERS: &[(Section, &[&str])] = &[
    (
        Section::Objective,
        &["objective", "summary", "profile", "about me", "career goal"],
    ),
    (Section::Education, &["education", "qualification"]),
    (Section::Skills, &["skill", "technical", "competenc", "expertise"]),
    (Section::Internships, &["internship", "industrial training"]),
    (Section::Projects, &["project"]),
    (
        Section::Achievements,
        &["achievement", "certif", "award", "honor", "honour", "accomplishment"],
    ),
    (Section::Experience, &["experience", "work", "employment"]),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn role(
    domain: &str,
    role_name: &str,
    career_level: CareerLevel,
    technical_skills: &[&str],
    soft_skills: &[&str],
    ats_keywords: &[&str],
    tools: &[&str],
    sample_project: &str,
) -> RoleProfile {
    RoleProfile {
        domain: domain.to_string(),
        role_name: role_name.to_string(),
        technical_skills: strings(technical_skills),
        soft_skills: strings(soft_skills),
        ats_keywords: strings(ats_keywords),
        tools: strings(tools),
        career_level,
        sample_project: sample_project.to_string(),
    }
}

fn builtin_roles() -> Vec<RoleProfile> {
    vec![
        role(
            "technology",
            "Software Engineer",
            CareerLevel::Mid,
            &[
                "Python", "Java", "JavaScript", "C++", "Data Structures", "Algorithms", "SQL",
                "Git", "REST APIs", "System Design", "React", "Node.js",
            ],
            &["Problem Solving", "Communication", "Teamwork", "Collaboration"],
            &[
                "software development", "agile", "scalable", "debugging", "unit testing",
                "code review", "microservices", "object-oriented",
            ],
            &["Git", "Docker", "Jira", "Linux"],
            "a task-management web application with authentication and a REST API",
        ),
        role(
            "technology",
            "Frontend Developer",
            CareerLevel::Junior,
            &[
                "HTML", "CSS", "JavaScript", "TypeScript", "React", "Angular", "Vue", "Redux",
                "Tailwind", "Next.js",
            ],
            &["Creativity", "Attention to Detail", "Communication", "Teamwork"],
            &[
                "user interface", "responsive design", "cross-browser", "accessibility",
                "web performance", "single page application",
            ],
            &["Figma", "Webpack", "Git", "npm"],
            "a responsive e-commerce storefront with a reusable component library",
        ),
        role(
            "technology",
            "Backend Developer",
            CareerLevel::Mid,
            &[
                "Java", "Python", "Node.js", "Go", "SQL", "PostgreSQL", "MongoDB", "Redis",
                "REST APIs", "GraphQL", "Microservices", "Spring Boot",
            ],
            &["Problem Solving", "Analytical Thinking", "Teamwork"],
            &[
                "api design", "scalability", "database design", "server-side",
                "authentication", "caching",
            ],
            &["Docker", "Postman", "Git", "Kafka"],
            "a rate-limited REST API backed by PostgreSQL and Redis caching",
        ),
        role(
            "technology",
            "Full Stack Developer",
            CareerLevel::Mid,
            &[
                "JavaScript", "TypeScript", "React", "Node.js", "Express", "MongoDB", "SQL",
                "HTML", "CSS", "REST APIs",
            ],
            &["Problem Solving", "Communication", "Adaptability", "Teamwork"],
            &["full stack", "end-to-end", "mern", "deployment", "responsive"],
            &["Git", "Docker", "AWS", "Postman"],
            "a full stack blogging platform with a React frontend and Node.js API",
        ),
        role(
            "technology",
            "Mobile Developer",
            CareerLevel::Mid,
            &[
                "Kotlin", "Swift", "Java", "Flutter", "Dart", "React Native", "Android", "iOS",
                "Firebase",
            ],
            &["Creativity", "Problem Solving", "Attention to Detail"],
            &[
                "mobile application", "play store", "app store", "push notifications",
                "offline support",
            ],
            &["Android Studio", "Xcode", "Git", "Firebase"],
            "a cross-platform expense tracker app with offline sync",
        ),
        role(
            "data",
            "Data Scientist",
            CareerLevel::Mid,
            &[
                "Python", "R", "Machine Learning", "Deep Learning", "Statistics", "Pandas",
                "NumPy", "Scikit-learn", "TensorFlow", "SQL", "Data Visualization",
            ],
            &["Analytical Thinking", "Communication", "Curiosity", "Problem Solving"],
            &[
                "predictive modeling", "feature engineering", "data analysis",
                "hypothesis testing", "model deployment", "a/b testing",
            ],
            &["Jupyter", "Tableau", "Git", "Spark"],
            "a customer churn prediction model with an interactive results dashboard",
        ),
        role(
            "data",
            "Data Analyst",
            CareerLevel::Junior,
            &[
                "SQL", "Excel", "Python", "Tableau", "Power BI", "Statistics",
                "Data Visualization", "Pandas",
            ],
            &["Analytical Thinking", "Attention to Detail", "Communication"],
            &[
                "dashboards", "reporting", "kpi", "data cleaning", "insights",
                "business intelligence",
            ],
            &["Excel", "Tableau", "Power BI", "Google Analytics"],
            "a sales performance dashboard built from cleaned transactional data",
        ),
        role(
            "data",
            "Machine Learning Engineer",
            CareerLevel::Senior,
            &[
                "Python", "PyTorch", "TensorFlow", "Machine Learning", "Deep Learning", "NLP",
                "Computer Vision", "MLOps", "Docker", "Kubernetes",
            ],
            &["Problem Solving", "Collaboration", "Curiosity"],
            &[
                "model training", "inference", "ml pipeline", "model serving",
                "feature store", "experimentation",
            ],
            &["MLflow", "Docker", "Kubernetes", "Git"],
            "an image classification service with automated retraining",
        ),
        role(
            "infrastructure",
            "DevOps Engineer",
            CareerLevel::Mid,
            &[
                "Linux", "Docker", "Kubernetes", "AWS", "Terraform", "CI/CD", "Jenkins",
                "Ansible", "Bash", "Python",
            ],
            &["Problem Solving", "Collaboration", "Communication"],
            &[
                "infrastructure as code", "automation", "deployment pipeline", "reliability",
                "observability", "monitoring",
            ],
            &["Jenkins", "GitHub Actions", "Prometheus", "Grafana"],
            "a CI/CD pipeline that deploys containerized services to Kubernetes",
        ),
        role(
            "infrastructure",
            "Cloud Engineer",
            CareerLevel::Mid,
            &[
                "AWS", "Azure", "GCP", "Terraform", "Kubernetes", "Linux", "Python",
                "Serverless",
            ],
            &["Problem Solving", "Communication", "Adaptability"],
            &[
                "cloud architecture", "migration", "high availability", "cost optimization",
                "iam",
            ],
            &["Terraform", "CloudFormation", "Git"],
            "a serverless image-processing pipeline on AWS Lambda and S3",
        ),
        role(
            "security",
            "Cybersecurity Analyst",
            CareerLevel::Mid,
            &[
                "Network Security", "SIEM", "Penetration Testing", "Linux", "Python",
                "Cryptography",
            ],
            &["Attention to Detail", "Critical Thinking", "Communication"],
            &[
                "threat detection", "incident response", "vulnerability assessment",
                "risk assessment", "compliance", "security operations",
            ],
            &["Wireshark", "Splunk", "Nmap", "Burp Suite"],
            "a home-lab intrusion detection setup with SIEM alerting",
        ),
        role(
            "design",
            "UI/UX Designer",
            CareerLevel::Junior,
            &[
                "Figma", "Wireframing", "Prototyping", "User Research", "Adobe XD", "HTML",
                "CSS",
            ],
            &["Creativity", "Empathy", "Communication", "Collaboration"],
            &[
                "user experience", "user-centered design", "interaction design",
                "visual design", "usability testing", "design systems",
            ],
            &["Figma", "Adobe XD", "Miro"],
            "a redesigned mobile banking onboarding flow validated with usability tests",
        ),
        role(
            "product",
            "Product Manager",
            CareerLevel::Leadership,
            &["Agile", "Scrum", "SQL", "Jira", "Data Visualization"],
            &[
                "Leadership", "Communication", "Stakeholder Management", "Decision Making",
            ],
            &[
                "product strategy", "roadmap", "go-to-market", "prioritization",
                "cross-functional", "user stories", "market research",
            ],
            &["Jira", "Confluence", "Figma", "Mixpanel"],
            "a product roadmap and launch plan for a subscription feature",
        ),
        role(
            "quality",
            "QA Engineer",
            CareerLevel::Junior,
            &[
                "Selenium", "Test Automation", "Java", "Python", "Cypress", "JUnit", "SQL",
            ],
            &["Attention to Detail", "Communication", "Analytical Thinking"],
            &[
                "test cases", "regression testing", "bug tracking", "quality assurance",
                "test plans", "api testing",
            ],
            &["Jira", "Postman", "Git"],
            "an automated regression suite for a web checkout flow",
        ),
    ]
}

impl LexiconData {
    /// The taxonomy shipped with the service.
    pub fn builtin() -> Self {
        Self {
            roles: builtin_roles(),
            hard_skills: strings(HARD_SKILLS),
            soft_skills: strings(SOFT_SKILLS),
            strong_verbs: strings(STRONG_VERBS),
            weak_verbs: strings(WEAK_VERBS),
            misspellings: strings(MISSPELLINGS),
            unprofessional_email_terms: strings(UNPROFESSIONAL_EMAIL_TERMS),
            skill_categories: SKILL_CATEGORIES
                .iter()
                .map(|(name, keywords)| SkillCategory {
                    name: name.to_string(),
                    keywords: strings(keywords),
                })
                .collect(),
            section_headers: SECTION_HEADERS
                .iter()
                .map(|(section, keywords)| SectionHeaders {
                    section: *section,
                    keywords: strings(keywords),
                })
                .collect(),
            title_keywords: strings(TITLE_KEYWORDS),
        }
    }
}
