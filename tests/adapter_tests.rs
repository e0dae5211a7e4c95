use ai_commenter::adapter::{build_payload, MAX_TOKENS, TEMPERATURE};
use ai_commenter::config::DEFAULT_MODEL;
use ai_commenter::normalize::{extract_comment, normalize};
use ai_commenter::providers::openrouter::{ChatResponse, Role};
use ai_commenter::style::{comment_style, COMMENT_STYLES, DEFAULT_STYLE};
use ai_commenter::{CommentRequest, CommentResult, Error};

fn response_from(json: &str) -> ChatResponse
{   serde_json::from_str(json).expect("valid completion json")
}

// ===== Style lookup =====

#[test]
fn test_every_mapped_language_resolves_to_its_style()
{   for (language, style) in COMMENT_STYLES
    {   assert_eq!(comment_style(language), *style);
    }
}

#[test]
fn test_style_lookup_ignores_case()
{   assert_eq!(comment_style("Java"), "JavaDoc");
    assert_eq!(comment_style("JAVA"), "JavaDoc");
    assert_eq!(comment_style("TypeScript"), "JSDoc");
    assert_eq!(comment_style("C#"), "XMLDoc");
}

#[test]
fn test_unknown_language_uses_block_style()
{   assert_eq!(comment_style("rust"), DEFAULT_STYLE);
    assert_eq!(comment_style(""), "block");
    assert_eq!(comment_style(" java"), "block");
}

// ===== Payload building =====

#[test]
fn test_java_scenario()
{   let request = CommentRequest::new("int x=1;", "Java", "English");
    let payload = build_payload(&request, DEFAULT_MODEL);

    assert_eq!(payload.messages.len(), 2);
    assert_eq!(payload.messages[0].role, Role::System);
    assert_eq!(payload.messages[1].role, Role::User);

    let system = &payload.messages[0].content;
    assert!(system.contains("JavaDoc"), "system: {}", system);
    assert!(system.contains("English"), "system: {}", system);
    assert!(system.contains("Java documentation assistant"));

    assert_eq!(
      payload.messages[1].content
    , "Comment the following code: int x=1;"
    );
}

#[test]
fn test_unknown_language_prompt_mentions_block()
{   let request = CommentRequest::new("fn main() {}", "Rust", "Español");
    let payload = build_payload(&request, DEFAULT_MODEL);
    let system = &payload.messages[0].content;
    assert!(system.contains("only the block comment"), "{}", system);
    assert!(system.contains("Language: Español"));
}

#[test]
fn test_code_passes_through_unmodified()
{   let code = "def f(x):\n    return \"quoted\" + '\\t'\n";
    let request = CommentRequest::new(code, "python", "en")
      .with_description("ignored by the prompt");
    let payload = build_payload(&request, DEFAULT_MODEL);
    assert_eq!(
      payload.messages[1].content
    , format!("Comment the following code: {}", code)
    );
    assert!(payload.messages.iter()
      .all(|m| !m.content.contains("ignored by the prompt")));
}

#[test]
fn test_empty_fields_are_not_rejected()
{   let request = CommentRequest::new("", "", "");
    let payload = build_payload(&request, DEFAULT_MODEL);
    assert_eq!(payload.messages.len(), 2);
    assert_eq!(payload.messages[1].content, "Comment the following code: ");
}

#[test]
fn test_payload_wire_shape()
{   let request = CommentRequest::new("x", "go", "en");
    let payload = build_payload(&request, "deepseek/deepseek-chat:free");
    let json = serde_json::to_value(&payload).expect("serializable");

    assert_eq!(json["model"], "deepseek/deepseek-chat:free");
    assert_eq!(json["max_tokens"], 100);
    assert_eq!(payload.max_tokens, MAX_TOKENS);
    assert_eq!(payload.temperature, TEMPERATURE);
    assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["role"], "user");
    assert!(json["messages"][0]["content"]
      .as_str().unwrap().contains("Godoc"));
}

// ===== Response normalizing =====

#[test]
fn test_normalize_success_scenario()
{   let response = response_from(
      r#"{"choices":[{"message":{"content":"/** adds two ints */"}}]}"#
    );
    assert_eq!(
      normalize(Some(&response))
    , CommentResult
      {   commented_code: Some("/** adds two ints */".to_string())
        , message: "comment generated successfully".to_string()
        , success: true
      }
    );
}

#[test]
fn test_normalize_empty_choices()
{   let response = response_from(r#"{"choices":[]}"#);
    assert_eq!(
      normalize(Some(&response))
    , CommentResult
      {   commented_code: None
        , message: "invalid provider response".to_string()
        , success: false
      }
    );
}

#[test]
fn test_normalize_absent_response_and_choices()
{   let absent = normalize(None);
    assert!(!absent.success);
    assert_eq!(absent.message, "invalid provider response");

    let no_choices = normalize(Some(&response_from("{}")));
    assert!(!no_choices.success);
    assert!(no_choices.commented_code.is_none());
}

#[test]
fn test_normalize_null_content_is_failure()
{   let response = response_from(
      r#"{"choices":[{"message":{"content":null}}]}"#
    );
    let result = normalize(Some(&response));
    assert!(!result.success);
    assert!(result.commented_code.is_none());

    let no_message = response_from(r#"{"choices":[{}]}"#);
    assert!(!normalize(Some(&no_message)).success);
}

#[test]
fn test_normalize_uses_only_first_choice()
{   let response = response_from(
      r#"{"choices":[
        {"message":{"content":"first"},"finish_reason":"stop"},
        {"message":{"content":"second"}}
      ],"id":"gen-1","model":"deepseek/deepseek-chat:free"}"#
    );
    assert_eq!(
      normalize(Some(&response)).commented_code.as_deref()
    , Some("first")
    );
}

#[test]
fn test_extract_comment_reports_no_choices()
{   let response = response_from(r#"{"choices":[]}"#);
    assert_eq!(
      extract_comment(Some(&response))
    , Err(Error::NoChoicesInResponse)
    );
    assert!(!Error::NoChoicesInResponse.is_transport());
}
