use rolodex_core::Contact;

const TABLE_NAME_WIDTH: usize = 10;
const SEARCH_NAME_WIDTH: usize = 20;

pub fn contact_table(contacts: &[Contact]) -> Vec<String> {
    let mut lines = Vec::with_capacity(contacts.len() + 2);
    lines.push(format!(
        "{:<width$} | {}",
        "Name",
        "Phone number",
        width = TABLE_NAME_WIDTH
    ));
    lines.push("-----------|-------------".to_string());
    for contact in contacts {
        lines.push(format!(
            "{:<width$} | {}",
            contact.name,
            contact.phone,
            width = TABLE_NAME_WIDTH
        ));
    }
    lines
}

pub fn search_row(contact: &Contact) -> String {
    format!(
        "{:<width$} | {}",
        contact.name,
        contact.phone,
        width = SEARCH_NAME_WIDTH
    )
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
