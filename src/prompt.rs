use crate::models::ReportInput;

pub const NO_ACADEMIC_DATA: &str = "No PowerSchool data provided.";
pub const NO_SKILL_DATA: &str = "No IXL data provided.";
pub const NO_BEHAVIOR_DATA: &str = "No behavioral notes provided.";
pub const NO_FOCUS_AREA: &str = "No specific focus area provided.";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Assembles the generation prompt. The six output sections and their
/// heading text are a compatibility contract with whoever reads the
/// rendered report; they must stay in this exact order and wording.
pub fn build_prompt(input: &ReportInput) -> String {
    format!(
        "**Role:** You are an experienced educator specializing in writing insightful, constructive, and well-structured student progress reports.\n\
         \n\
         **Task:** Analyze the provided data for a student named **{name}** and generate a comprehensive progress report. The report should synthesize all information into a coherent narrative.\n\
         \n\
         **Tone:** Professional, encouraging, and supportive. Focus on growth and actionable feedback. Avoid overly negative language.\n\
         \n\
         **Input Data:**\n\
         \n\
         *   **PowerSchool Data (Grades, Attendance, etc.):**\n\
         ```\n\
         {academic}\n\
         ```\n\
         \n\
         *   **IXL Data (Skills Mastered, Time Spent, etc.):**\n\
         ```\n\
         {skill}\n\
         ```\n\
         \n\
         *   **Teacher's Behavioral Notes:**\n\
         ```\n\
         {behavior}\n\
         ```\n\
         \n\
         *   **Specific Focus Area/Concern from Teacher:**\n\
         ```\n\
         {focus}\n\
         ```\n\
         \n\
         **Required Output Format:**\n\
         \n\
         Generate the report using Markdown. The report MUST include the following sections in this exact order:\n\
         \n\
         ### **Progress Report: {name}**\n\
         \n\
         #### **I. Overall Summary**\n\
         *A brief, high-level overview of the student's progress this period, touching upon academic, skill, and behavioral aspects.*\n\
         \n\
         #### **II. Academic Performance (based on PowerSchool)**\n\
         *Analyze the grades, identify trends (e.g., improvement in Math, decline in ELA), and comment on attendance if relevant. Be specific.*\n\
         \n\
         #### **III. Skill Development (based on IXL)**\n\
         *Interpret the IXL data. Comment on areas of strength, skills mastered, effort (time spent), and any persistent challenges. Connect this to classroom performance where possible.*\n\
         \n\
         #### **IV. Classroom Behavior & Social-Emotional Growth**\n\
         *Synthesize the behavioral notes into a paragraph describing the student's conduct, participation, collaboration with peers, and attitude towards learning.*\n\
         \n\
         #### **V. Key Strengths**\n\
         *A bulleted list of 3-5 key positive attributes, skills, or behaviors observed.*\n\
         *   Example: - Proactive in seeking help.\n\
         *   Example: - Demonstrates strong analytical skills in science.\n\
         \n\
         #### **VI. Areas for Growth & Recommendations**\n\
         *A bulleted list of 3-5 constructive, actionable suggestions for the student, parents, and teacher to support continued development.*\n\
         *   Example: - **For Student:** Practice IXL math skills for 15 minutes daily.\n\
         *   Example: - **For Parents:** Review the student's planner each evening to ensure homework is complete.\n\
         *   Example: - **For Teacher:** Provide more opportunities for leadership roles in group projects.\n",
        name = input.student_name,
        academic = or_placeholder(&input.academic_data, NO_ACADEMIC_DATA),
        skill = or_placeholder(&input.skill_data, NO_SKILL_DATA),
        behavior = or_placeholder(&input.behavior_data, NO_BEHAVIOR_DATA),
        focus = or_placeholder(&input.focus_area, NO_FOCUS_AREA),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> ReportInput {
        ReportInput {
            student_name: "Peter Jones".to_string(),
            academic_data: "Grade: C (75%)".to_string(),
            skill_data: "Skills Mastered: 2".to_string(),
            behavior_data: "Seems withdrawn.".to_string(),
            focus_area: "Late assignments.".to_string(),
        }
    }

    const SECTION_HEADINGS: [&str; 6] = [
        "#### **I. Overall Summary**",
        "#### **II. Academic Performance (based on PowerSchool)**",
        "#### **III. Skill Development (based on IXL)**",
        "#### **IV. Classroom Behavior & Social-Emotional Growth**",
        "#### **V. Key Strengths**",
        "#### **VI. Areas for Growth & Recommendations**",
    ];

    #[test]
    fn identical_input_yields_identical_prompt() {
        assert_eq!(build_prompt(&full_input()), build_prompt(&full_input()));
    }

    #[test]
    fn sections_appear_in_fixed_order_even_with_empty_fields() {
        for input in [full_input(), ReportInput::default()] {
            let prompt = build_prompt(&input);
            let mut last = 0;
            for heading in SECTION_HEADINGS {
                let at = prompt.find(heading).expect("heading missing");
                assert!(at >= last, "headings out of order");
                last = at;
            }
        }
    }

    #[test]
    fn empty_fields_get_placeholders_not_empty_blocks() {
        let prompt = build_prompt(&ReportInput {
            student_name: "Jane Smith".to_string(),
            ..ReportInput::default()
        });
        for placeholder in [NO_ACADEMIC_DATA, NO_SKILL_DATA, NO_BEHAVIOR_DATA, NO_FOCUS_AREA] {
            assert!(prompt.contains(placeholder));
        }
        assert!(!prompt.contains("```\n\n```"));
    }

    #[test]
    fn populated_fields_pass_through_verbatim() {
        let prompt = build_prompt(&full_input());
        assert!(prompt.contains("Grade: C (75%)"));
        assert!(prompt.contains("Skills Mastered: 2"));
        assert!(prompt.contains("Seems withdrawn."));
        assert!(prompt.contains("Late assignments."));
        for placeholder in [NO_ACADEMIC_DATA, NO_SKILL_DATA, NO_BEHAVIOR_DATA, NO_FOCUS_AREA] {
            assert!(!prompt.contains(placeholder));
        }
        assert!(prompt.contains("### **Progress Report: Peter Jones**"));
    }
}
