use std::time::Duration;

use tracing::debug;

use crate::models::Student;

/// PowerSchool-shaped source: holds the roster and per-student academic
/// records (grades, attendance, teacher comments).

const NOT_FOUND: &str = "No data found for this student.";

fn records(student_id: &str) -> Option<&'static str> {
    let text = match student_id {
        "101" => {
            "Subject: Math\n\
             Grade: B+ (88%)\n\
             Teacher Comments: John consistently participates in class discussions. Struggles with complex algebraic concepts but shows improvement.\n\
             ---\n\
             Subject: English Language Arts\n\
             Grade: A- (92%)\n\
             Teacher Comments: Excellent reading comprehension. Needs to work on providing more detailed evidence in analytical essays.\n\
             ---\n\
             Attendance:\n\
             Absences: 2 (excused)\n\
             Tardies: 1"
        }
        "102" => {
            "Subject: Math\n\
             Grade: A (95%)\n\
             Teacher Comments: Jane has a strong grasp of all mathematical concepts and often helps her peers.\n\
             ---\n\
             Subject: English Language Arts\n\
             Grade: A (96%)\n\
             Teacher Comments: A talented writer with a creative voice. Consistently submits high-quality work.\n\
             ---\n\
             Attendance:\n\
             Absences: 0\n\
             Tardies: 0"
        }
        "103" => {
            "Subject: Science\n\
             Grade: C (75%)\n\
             Teacher Comments: Peter shows curiosity but needs to improve his study habits for tests. Lab work is satisfactory.\n\
             ---\n\
             Subject: Social Studies\n\
             Grade: B (85%)\n\
             Teacher Comments: Engages well with historical topics. Written assignments are well-researched.\n\
             ---\n\
             Attendance:\n\
             Absences: 4 (3 unexcused)\n\
             Tardies: 3"
        }
        "104" => {
            "Subject: Art\n\
             Grade: A+ (99%)\n\
             Teacher Comments: Mary is an exceptionally talented artist with a unique vision. A leader in the classroom.\n\
             ---\n\
             Subject: Physical Education\n\
             Grade: B- (81%)\n\
             Teacher Comments: Participates enthusiastically. Can work on teamwork skills during group sports.\n\
             ---\n\
             Attendance:\n\
             Absences: 1 (excused)\n\
             Tardies: 0"
        }
        _ => return None,
    };
    Some(text)
}

/// A real deployment would run an OAuth2 client-credentials flow here.
/// The simulation accepts any fully filled-in credential set.
pub async fn connect(server_url: &str, client_id: &str, client_secret: &str) -> bool {
    debug!(server_url, client_id, "connecting to PowerSchool");
    if server_url.is_empty() || client_id.is_empty() || client_secret.is_empty() {
        tokio::time::sleep(Duration::from_millis(200)).await;
        return false;
    }
    tokio::time::sleep(Duration::from_millis(1000)).await;
    true
}

pub async fn roster() -> Vec<Student> {
    tokio::time::sleep(Duration::from_millis(1000)).await;
    [
        ("101", "John Doe"),
        ("102", "Jane Smith"),
        ("103", "Peter Jones"),
        ("104", "Mary Williams"),
    ]
    .into_iter()
    .map(|(id, name)| Student {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub async fn fetch_student(student_id: &str) -> String {
    tokio::time::sleep(Duration::from_millis(500)).await;
    records(student_id).unwrap_or(NOT_FOUND).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn connect_rejects_any_empty_credential() {
        assert!(!connect("", "id", "secret").await);
        assert!(!connect("https://myschool.powerschool.com", "", "secret").await);
        assert!(!connect("https://myschool.powerschool.com", "id", "").await);
        assert!(connect("https://myschool.powerschool.com", "id", "secret").await);
    }

    #[tokio::test(start_paused = true)]
    async fn roster_has_four_fixed_entries() {
        let students = roster().await;
        assert_eq!(students.len(), 4);
        assert_eq!(students[2].id, "103");
        assert_eq!(students[2].name, "Peter Jones");
    }

    #[tokio::test(start_paused = true)]
    async fn known_ids_return_canned_records() {
        for id in ["101", "102", "103", "104"] {
            let data = fetch_student(id).await;
            assert_eq!(data, records(id).unwrap());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_returns_not_found_text() {
        assert_eq!(fetch_student("999").await, NOT_FOUND);
    }
}
