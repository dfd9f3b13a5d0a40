//! Rule-based answers used whenever generation is unavailable or unusable.

use super::assistant::PoiDescription;
use crate::extract::DEFAULT_HIGHLIGHT;

const FOOD_WORDS: &[&str] = &["eat", "food", "restaurant", "ăn"];
const SIGHTSEEING_WORDS: &[&str] = &["visit", "go", "see", "tham quan"];
const LODGING_WORDS: &[&str] = &["hotel", "stay", "sleep", "khách sạn"];

/// Canned chat reply chosen by keywords in the message.
///
/// Keywords match as substrings of the lower-cased message; the first group
/// that matches wins.
pub fn chat_reply(message: &str, location_name: Option<&str>) -> String {
    let message = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| message.contains(w));

    if mentions(FOOD_WORDS) {
        format!(
            "Tôi gợi ý bạn tìm các nhà hàng gần {}. Hãy thử bộ lọc 'Nhà hàng' hoặc 'Cà phê'!",
            location_name.unwrap_or("vị trí hiện tại")
        )
    } else if mentions(SIGHTSEEING_WORDS) {
        "Bạn có thể khám phá công viên, bảo tàng hoặc địa điểm nổi bật gần đây!".to_string()
    } else if mentions(LODGING_WORDS) {
        "Hãy thử tìm kiếm 'khách sạn' hoặc 'nhà nghỉ' trong thanh tìm kiếm!".to_string()
    } else {
        format!(
            "Xin chào! Tôi có thể giúp bạn tìm địa điểm ở {}.",
            location_name.unwrap_or("Việt Nam")
        )
    }
}

/// Canned description and highlights for a POI type.
pub fn poi_description(poi_name: &str, poi_type: &str) -> PoiDescription {
    let (description, highlights): (String, &[&str]) = match poi_type {
        "restaurant" => (
            "Nhà hàng phục vụ ẩm thực đa dạng".to_string(),
            &["Ẩm thực", "Không gian thoải mái"][..],
        ),
        "cafe" => (
            "Quán cà phê lý tưởng để thư giãn".to_string(),
            &["Đồ uống", "Không gian yên tĩnh"][..],
        ),
        "park" => (
            "Công viên xanh mát phù hợp dạo chơi".to_string(),
            &["Thiên nhiên", "Thư giãn"][..],
        ),
        "museum" => (
            "Bảo tàng lưu giữ di sản văn hóa".to_string(),
            &["Lịch sử", "Giáo dục"][..],
        ),
        _ => (
            format!("{poi_name} là một điểm đến thú vị tại Việt Nam."),
            &[DEFAULT_HIGHLIGHT][..],
        ),
    };

    PoiDescription {
        description,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}
