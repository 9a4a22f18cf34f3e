//! Keyword-based skill extraction.

use crate::data::ExtractedSkills;

/// A named bucket of keyword literals.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    /// Category name used as the key in [`ExtractedSkills`].
    pub name: &'static str,
    /// Keywords in canonical casing.
    pub keywords: &'static [&'static str],
}

/// Category used when no keyword matches.
pub const GENERAL_CATEGORY: &str = "General";

/// Items placed in the [`GENERAL_CATEGORY`] fallback bucket.
pub const GENERAL_SKILLS: [&str; 3] = ["General Aptitude", "Communication", "Problem Solving"];

/// Category names referenced by the content generator.
pub const CORE_CS: &str = "Core CS";
/// Programming languages.
pub const LANGUAGES: &str = "Languages";
/// Frontend and backend web stacks.
pub const WEB_DEVELOPMENT: &str = "Web Development";
/// Databases and messaging.
pub const DATA_AND_DB: &str = "Data & DB";
/// Cloud platforms and tooling.
pub const CLOUD_AND_DEVOPS: &str = "Cloud & DevOps";

/// The fixed keyword table, in display order.
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: CORE_CS,
        keywords: &[
            "DSA",
            "Data Structures",
            "Algorithms",
            "OOP",
            "Object Oriented",
            "DBMS",
            "Database Management",
            "OS",
            "Operating Systems",
            "Networks",
            "Computer Networks",
            "System Design",
            "Low Level Design",
            "High Level Design",
        ],
    },
    SkillCategory {
        name: LANGUAGES,
        keywords: &[
            "Java",
            "Python",
            "JavaScript",
            "JS",
            "TypeScript",
            "TS",
            "C++",
            "C#",
            "Golang",
            "Go",
            "Ruby",
            "Swift",
            "Kotlin",
            "Rust",
            "PHP",
        ],
    },
    SkillCategory {
        name: WEB_DEVELOPMENT,
        keywords: &[
            "React",
            "Next.js",
            "Node",
            "Node.js",
            "Express",
            "Vue",
            "Angular",
            "HTML",
            "CSS",
            "Tailwind",
            "Bootstrap",
            "Redux",
            "GraphQL",
            "REST",
            "API",
        ],
    },
    SkillCategory {
        name: DATA_AND_DB,
        keywords: &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "NoSQL",
            "Redis",
            "Cassandra",
            "Elasticsearch",
            "Kafka",
            "RabbitMQ",
        ],
    },
    SkillCategory {
        name: CLOUD_AND_DEVOPS,
        keywords: &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "K8s",
            "Jenkins",
            "CI/CD",
            "Git",
            "GitHub",
            "GitLab",
            "Linux",
            "Bash",
            "Shell",
        ],
    },
    SkillCategory {
        name: "Testing",
        keywords: &[
            "Selenium",
            "Cypress",
            "Playwright",
            "Jest",
            "Mocha",
            "JUnit",
            "PyTest",
            "TestNG",
        ],
    },
    SkillCategory {
        name: "AI/ML",
        keywords: &[
            "Machine Learning",
            "Deep Learning",
            "NLP",
            "TensorFlow",
            "PyTorch",
            "Keras",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "OpenCV",
        ],
    },
];

/// Extracted skills plus the raw number of keyword hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillScan {
    /// Matched keywords by category, never empty.
    pub skills: ExtractedSkills,
    /// Number of keywords matched across all categories (0 when falling back).
    pub total_matches: usize,
}

/// Scans `text` for every keyword in [`SKILL_CATEGORIES`].
///
/// Matching is plain case-insensitive substring containment, so `Go` also
/// matches inside "good". When nothing matches the result holds the single
/// [`GENERAL_CATEGORY`] bucket.
pub fn extract_skills(text: &str) -> SkillScan {
    let haystack = text.to_lowercase();
    let mut skills = ExtractedSkills::new();
    let mut total_matches = 0;

    for category in SKILL_CATEGORIES {
        let mut found: Vec<String> = Vec::new();
        for keyword in category.keywords {
            if haystack.contains(&keyword.to_lowercase()) && !found.iter().any(|k| k == keyword) {
                found.push((*keyword).to_string());
            }
        }

        if !found.is_empty() {
            total_matches += found.len();
            skills.insert(category.name.to_string(), found);
        }
    }

    if total_matches == 0 {
        skills.insert(
            GENERAL_CATEGORY.to_string(),
            GENERAL_SKILLS.iter().map(|s| (*s).to_string()).collect(),
        );
    }

    SkillScan {
        skills,
        total_matches,
    }
}

/// Returns true when `skills` contains a non-empty `category`.
pub fn has_category(skills: &ExtractedSkills, category: &str) -> bool {
    skills.get(category).is_some_and(|found| !found.is_empty())
}
