use std::time::Duration;

use tracing::debug;

/// Behavioral-observation source. Modeled as an internal system that is
/// already authenticated, so connecting takes no credentials and cannot
/// be refused.

const NOT_FOUND: &str = "No behavioral notes found for this student.";

fn records(student_id: &str) -> Option<&'static str> {
    let text = match student_id {
        "101" => {
            "Observation Date: 2023-10-26\n\
             Observer: Mrs. Davis\n\
             Notes: John was highly engaged during the group activity on historical documents. He helped his peers understand the task. However, he was distracted during independent reading time and needed several reminders to stay on task."
        }
        "102" => {
            "Observation Date: 2023-10-25\n\
             Observer: Mr. Smith\n\
             Notes: Jane consistently demonstrates leadership qualities. She is respectful to peers and teachers and takes initiative in classroom management. An exemplary role model."
        }
        "103" => {
            "Observation Date: 2023-10-24\n\
             Observer: Mrs. Davis\n\
             Notes: Peter seems withdrawn and has not been participating in class discussions. He has submitted his last two assignments late. Recommend a student-teacher check-in."
        }
        "104" => {
            "Observation Date: 2023-10-27\n\
             Observer: Mr. Thompson\n\
             Notes: Mary shows great enthusiasm and creativity. She can sometimes get overly excited and talk over her peers during group work. Needs gentle reminders about active listening."
        }
        _ => return None,
    };
    Some(text)
}

pub async fn connect() -> bool {
    debug!("connecting to internal behavior system");
    tokio::time::sleep(Duration::from_millis(500)).await;
    true
}

pub async fn fetch_student(student_id: &str) -> String {
    tokio::time::sleep(Duration::from_millis(700)).await;
    records(student_id).unwrap_or(NOT_FOUND).to_string()
}
