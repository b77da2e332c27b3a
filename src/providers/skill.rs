use std::time::Duration;

use tracing::debug;

/// IXL-shaped source: per-student skill practice and diagnostic data.

const NOT_FOUND: &str = "No IXL data found for this student.";

fn records(student_id: &str) -> Option<&'static str> {
    let text = match student_id {
        "101" => {
            "Subject: Math\n\
             Time Spent: 2h 15m\n\
             Skills Mastered: 8\n\
             Diagnostic Strand: Algebra - Score 680 (Working at Grade Level)\n\
             Teacher Recommendation: Focus on \"Solving quadratic equations\"."
        }
        "102" => {
            "Subject: English Language Arts\n\
             Time Spent: 3h 5m\n\
             Skills Mastered: 12\n\
             Diagnostic Strand: Reading Comprehension - Score 750 (Above Grade Level)\n\
             Teacher Recommendation: Explore \"Analyzing informational texts\"."
        }
        "103" => {
            "Subject: Math\n\
             Time Spent: 45m\n\
             Skills Mastered: 2\n\
             Diagnostic Strand: Geometry - Score 510 (Needs Improvement)\n\
             Teacher Recommendation: Practice \"Understanding angles and lines\"."
        }
        "104" => {
            "Subject: Science\n\
             Time Spent: 1h 30m\n\
             Skills Mastered: 6\n\
             Diagnostic Strand: Life Science - Score 710 (Proficient)\n\
             Teacher Recommendation: Challenge with \"Ecosystem dynamics\"."
        }
        _ => return None,
    };
    Some(text)
}

pub async fn connect(username: &str, secret: &str) -> bool {
    debug!(username, "connecting to IXL");
    if username.is_empty() || secret.is_empty() {
        tokio::time::sleep(Duration::from_millis(200)).await;
        return false;
    }
    tokio::time::sleep(Duration::from_millis(800)).await;
    true
}

pub async fn fetch_student(student_id: &str) -> String {
    tokio::time::sleep(Duration::from_millis(600)).await;
    records(student_id).unwrap_or(NOT_FOUND).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn connect_requires_both_credentials() {
        assert!(!connect("", "password123").await);
        assert!(!connect("teacher@school.edu", "").await);
        assert!(connect("teacher@school.edu", "password123").await);
    }

    #[tokio::test(start_paused = true)]
    async fn known_ids_return_canned_records() {
        for id in ["101", "102", "103", "104"] {
            assert_eq!(fetch_student(id).await, records(id).unwrap());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_returns_not_found_text() {
        assert_eq!(fetch_student("105").await, NOT_FOUND);
    }
}
