use once_cell::sync::Lazy;
use std::collections::HashMap;

static DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("restaurant", "Nhà hàng"),
        ("cafe", "Cà phê"),
        ("fast_food", "Fast food"),
        ("bakery", "Bánh ngọt"),
        ("park", "Công viên"),
        ("museum", "Bảo tàng"),
        ("hospital", "Bệnh viện"),
        ("pharmacy", "Nhà thuốc"),
        ("supermarket", "Siêu thị"),
        ("bank", "Ngân hàng"),
        ("atm", "ATM"),
        ("fuel", "Trạm xăng"),
        ("hotel", "Khách sạn"),
        ("viewpoint", "Điểm ngắm cảnh"),
        ("playground", "Sân chơi"),
        ("library", "Thư viện"),
    ])
});

/// Vietnamese display name for a category key.
///
/// Unknown keys never fail: `"guest_house"` becomes `"Guest House"`.
pub fn display_name(category: &str) -> String {
    match DISPLAY_NAMES.get(category) {
        Some(name) => (*name).to_string(),
        None => title_case(&category.replace('_', " ")),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category() {
        assert_eq!(display_name("museum"), "Bảo tàng");
        assert_eq!(display_name("atm"), "ATM");
    }

    #[test]
    fn test_unknown_category_is_title_cased() {
        assert_eq!(display_name("foo_bar"), "Foo Bar");
        assert_eq!(display_name("guest_house"), "Guest House");
        assert_eq!(display_name("theatre"), "Theatre");
    }

    #[test]
    fn test_title_case_resets_after_non_letters() {
        assert_eq!(title_case("route66diner"), "Route66Diner");
        assert_eq!(title_case("SHOUTY name"), "Shouty Name");
        assert_eq!(title_case(""), "");
    }
}
