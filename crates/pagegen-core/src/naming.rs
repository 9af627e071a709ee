//! Identifier case conversions used for prompt defaults and render contexts

/// "user management" => "UserManagement"
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// "User Management" => "user-management"
pub fn to_kebab_case(s: &str) -> String {
    s.to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Simple English plural: "Category" => "Categories", "Box" => "Boxes"
pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let vowel_y = ["ay", "ey", "iy", "oy", "uy"]
        .iter()
        .any(|suffix| lower.ends_with(suffix));

    if lower.ends_with('y') && !vowel_y {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("user management"), "UserManagement");
        assert_eq!(to_pascal_case("support-tickets"), "SupportTickets");
        assert_eq!(to_pascal_case("ticket"), "Ticket");
        assert_eq!(to_pascal_case("  "), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("User Management"), "user-management");
        assert_eq!(to_kebab_case("  Orders & Returns "), "orders-returns");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Ticket"), "Tickets");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Match"), "Matches");
    }
}
