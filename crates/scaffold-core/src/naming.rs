//! Case conversion for generated Go identifiers and file names

/// Convert a module name to PascalCase for Go type names.
///
/// Word boundaries are `-`, `_`, whitespace, and lower-to-upper transitions,
/// so `user-profile`, `user_profile`, and `userProfile` all become
/// `UserProfile`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            upper_next = true;
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            upper_next = true;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
    }

    out
}

/// Convert a module name to snake_case for generated file names.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() {
            if prev_lower && !out.is_empty() {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_numeric();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_from_lower() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("shopapi"), "Shopapi");
    }

    #[test]
    fn test_pascal_case_from_separators() {
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("order item"), "OrderItem");
    }

    #[test]
    fn test_pascal_case_from_camel() {
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("user"), "user");
        assert_eq!(to_snake_case("userProfile"), "user_profile");
        assert_eq!(to_snake_case("user-profile"), "user_profile");
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
    }
}
