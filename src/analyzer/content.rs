//! Interview questions, round checklist and study plan generation.

use crate::analyzer::skills::{
    has_category, CLOUD_AND_DEVOPS, CORE_CS, DATA_AND_DB, LANGUAGES, WEB_DEVELOPMENT,
};
use crate::data::{DayPlan, ExtractedSkills, RoundChecklist};

/// Number of questions produced per analysis.
pub const QUESTION_COUNT: usize = 10;

const WEB_QUESTIONS: [&str; 3] = [
    "Explain the difference between '==' and '===' in JavaScript.",
    "What is the Virtual DOM in React and how does it work?",
    "Explain the concept of closures.",
];

const CORE_CS_QUESTIONS: [&str; 3] = [
    "Explain the 4 pillars of OOP with real-world examples.",
    "What is the difference between a process and a thread?",
    "How does a HashMap work internally?",
];

const DATA_QUESTIONS: [&str; 3] = [
    "Explain ACID properties in databases.",
    "What is the difference between SQL and NoSQL?",
    "Explain Indexing and how it improves query performance.",
];

const DEVOPS_QUESTIONS: [&str; 2] = [
    "What is Docker and how is it different from a Virtual Machine?",
    "Explain the concept of CI/CD.",
];

const GENERAL_QUESTIONS: [&str; 4] = [
    "Tell me about a challenging project you worked on.",
    "Where do you see yourself in 5 years?",
    "Why do you want to join this company?",
    "Describe a time you had a conflict with a team member.",
];

/// Generated preparation material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepContent {
    /// Round-wise checklist.
    pub checklist: RoundChecklist,
    /// Study plan.
    pub plan: Vec<DayPlan>,
    /// Exactly [`QUESTION_COUNT`] questions.
    pub questions: Vec<String>,
}

/// Builds questions, checklist and plan for a set of extracted skills.
pub fn generate_content(skills: &ExtractedSkills) -> PrepContent {
    PrepContent {
        checklist: round_checklist(skills),
        plan: study_plan(),
        questions: interview_questions(skills),
    }
}

/// Collects category-triggered questions, padded with general ones.
pub fn interview_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<&str> = Vec::with_capacity(QUESTION_COUNT + 1);

    if has_category(skills, WEB_DEVELOPMENT) || has_category(skills, LANGUAGES) {
        questions.extend(WEB_QUESTIONS);
    }
    if has_category(skills, CORE_CS) {
        questions.extend(CORE_CS_QUESTIONS);
    }
    if has_category(skills, DATA_AND_DB) {
        questions.extend(DATA_QUESTIONS);
    }
    if has_category(skills, CLOUD_AND_DEVOPS) {
        questions.extend(DEVOPS_QUESTIONS);
    }

    // Padding cycles by the current length, so which general question lands
    // in a slot depends on how many pools fired.
    while questions.len() < QUESTION_COUNT {
        questions.push(GENERAL_QUESTIONS[questions.len() % GENERAL_QUESTIONS.len()]);
    }
    questions.truncate(QUESTION_COUNT);

    questions.into_iter().map(str::to_string).collect()
}

/// Four rounds of mostly fixed items with two skill-dependent swaps.
pub fn round_checklist(skills: &ExtractedSkills) -> RoundChecklist {
    let database_item = if has_category(skills, DATA_AND_DB) {
        "SQL Queries & Normalization"
    } else {
        "Basic Database Concepts"
    };
    let framework_item = if has_category(skills, WEB_DEVELOPMENT) {
        "Frontend/Backend Framework specifics"
    } else {
        "Language specific internals"
    };

    let rounds: [(&str, [&str; 4]); 4] = [
        (
            "Round 1: Aptitude & Basics",
            [
                "Quantitative Aptitude (Time & Work, Percentages)",
                "Logical Reasoning (Puzzles, Series)",
                "Verbal Ability (Reading Comprehension)",
                "Resume Walkthrough Preparation",
            ],
        ),
        (
            "Round 2: Technical (Core)",
            [
                "Data Structures (Arrays, Strings, Linked Lists)",
                "Algorithms (Sorting, Searching)",
                "OOP Concepts (Polymorphism, Inheritance)",
                database_item,
            ],
        ),
        (
            "Round 3: Advanced Technical",
            [
                "System Design (Scalability, Load Balancing)",
                "Project Deep Dive (Architecture, Challenges)",
                framework_item,
                "Live Coding / Pair Programming",
            ],
        ),
        (
            "Round 4: Managerial & HR",
            [
                "Star Method for Behavioral Questions",
                "Company Research (Values, Mission)",
                "Salary Negotiation Preparation",
                "Questions to ask the interviewer",
            ],
        ),
    ];

    rounds
        .into_iter()
        .map(|(round, items)| {
            (
                round.to_string(),
                items.iter().map(|item| (*item).to_string()).collect(),
            )
        })
        .collect()
}

/// The fixed seven-day plan; independent of the analysed text.
pub fn study_plan() -> Vec<DayPlan> {
    let plan: [(&str, &str, [&str; 3]); 5] = [
        (
            "Day 1-2",
            "Foundations",
            [
                "Revise Core CS concepts (OS, DBMS)",
                "Practice 10 Easy LeetCode problems",
                "Review Aptitude formulas",
            ],
        ),
        (
            "Day 3-4",
            "Coding & Algorithms",
            [
                "Focus on Arrays, Trees, and Graphs",
                "Implement standard algorithms from scratch",
                "Mock test: 45 mins coding",
            ],
        ),
        (
            "Day 5",
            "Projects & Resume",
            [
                "Refine resume points",
                "Prepare 'Project Story' for interviews",
                "Review system design of your projects",
            ],
        ),
        (
            "Day 6",
            "Mock Interviews",
            [
                "Peer mock interview",
                "Record yourself answering behavioral questions",
                "Review weak technical areas",
            ],
        ),
        (
            "Day 7",
            "Final Polish",
            [
                "Company specific research",
                "Rest and mindset preparation",
                "Review notes and cheat sheets",
            ],
        ),
    ];

    plan.into_iter()
        .map(|(day, focus, tasks)| DayPlan {
            day: day.to_string(),
            focus: focus.to_string(),
            tasks: tasks.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect()
}
