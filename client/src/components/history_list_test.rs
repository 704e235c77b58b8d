use super::*;

#[test]
fn prompt_label_trims_prompt() {
    assert_eq!(prompt_label("  photosynthesis  "), "photosynthesis");
}

#[test]
fn prompt_label_names_file_only_submissions() {
    assert_eq!(prompt_label(""), "Uploaded document");
    assert_eq!(prompt_label(" \n"), "Uploaded document");
}
