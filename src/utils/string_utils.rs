//! 문자열 처리 유틸리티
//!
//! 폼/쿼리 입력 정리, 목록 분리, 리다이렉트 목적지 검증 함수를 제공합니다.

use serde::Deserialize;

/// 선택적 문자열을 정리합니다. 공백뿐인 문자열은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde용: 빈 문자열을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 구분자로 나눈 뒤 각 항목을 trim하고 빈 항목을 버립니다.
///
/// `\r\n` 줄바꿈도 처리됩니다.
pub fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 로그인 후 리다이렉트 목적지로 허용되는 로컬 경로인지 확인합니다.
///
/// `/`로 시작하는 사이트 내부 경로만 허용합니다. 스킴 상대 URL(`//evil`),
/// 역슬래시, 제어 문자가 포함된 값은 거부합니다.
pub fn is_safe_destination(destination: &str) -> bool {
    destination.starts_with('/')
        && !destination.starts_with("//")
        && !destination.contains('\\')
        && !destination.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  /node/1  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("/node/1".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b\nc", &['\n', ',']), vec!["a", "b", "c"]);
        assert_eq!(split_list("a\r\n\r\nb", &['\n']), vec!["a", "b"]);
        assert_eq!(split_list("a,b", &['\n']), vec!["a,b"]);
        assert!(split_list("", &['\n']).is_empty());
        assert!(split_list(" \n , ", &['\n', ',']).is_empty());
    }

    #[test]
    fn test_is_safe_destination() {
        assert!(is_safe_destination("/"));
        assert!(is_safe_destination("/node/1?x=y"));

        assert!(!is_safe_destination("https://evil.example"));
        assert!(!is_safe_destination("//evil.example"));
        assert!(!is_safe_destination("/\\evil.example"));
        assert!(!is_safe_destination("node/1"));
        assert!(!is_safe_destination("/a\r\nSet-Cookie: x"));
        assert!(!is_safe_destination(""));
    }
}
