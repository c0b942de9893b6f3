//! Prompt text for the planner and expander stages.

use deckforge_core::SectionRecord;

pub const OUTLINE_SYSTEM_PROMPT: &str = "\
You are a helpful assistant that generates structured outlines for slide \
presentations based on user reports. Each outline consists of a title, \
description, total number of slides, and sections with titles, descriptions, \
and slide counts.";

pub const SECTION_SYSTEM_PROMPT: &str = "\
You are a helpful assistant that generates presentation slides based on \
section outlines. Each slide should have a title, content, and optional \
speaker notes.
Guidelines for generating slides:
- Each slide should focus on a single main idea.
- The title should be concise (8 words or fewer).
- The content should be clear and concise, ideally 100-150 words per slide.
- Use bullet points for clarity, with 3-5 bullets per slide.";

pub fn outline_user_prompt(requirements: &str, report: &str) -> String {
    format!(
        "Generate a structured presentation outline for the following report:\n\n\
         ---\n# Report:\n\n{report}\n\n\
         ---\n# User Requirements:\n\n{requirements}"
    )
}

pub fn section_user_prompt(requirements: &str, report: &str, section: &SectionRecord) -> String {
    format!(
        "Generate {num} slides for the section titled '{title}' with description \
         '{description}' based on the following report.\n\n\
         ---\n# Report:\n\n{report}\n\n\
         ---\n# User Requirements for the Full Presentation:\n\n{requirements}",
        num = section.num_slides,
        title = section.title,
        description = section.description,
    )
}
