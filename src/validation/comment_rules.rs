use crate::dto::requests::submit_comment_request::SubmitCommentRequest;

use super::rules::{FieldRules, Rule, Ruleset};

/// The fixed ruleset for the comment form. Built once at startup and held in
/// server state; message templates carry the rule's bound parameters.
pub fn comment_ruleset() -> Ruleset<SubmitCommentRequest> {
    Ruleset::new(vec![
        FieldRules::new("name", |r: &SubmitCommentRequest| r.name.as_str())
            .rule(Rule::Required, "名前は必須入力です")
            .rule(Rule::CharLength { min: 5, max: 20 }, "名前は {min}～{max} 文字です")
            .rule(Rule::PrintableAscii, "名前はASCIIで入力して下さい"),
        FieldRules::new("email", |r: &SubmitCommentRequest| r.email.as_str())
            .rule(Rule::Required, "メールアドレスは必須入力です")
            .rule(
                Rule::CharLength { min: 5, max: 40 },
                "メールアドレスは {min}～{max} 文字です",
            )
            .rule(Rule::ValidEmail, "メールアドレスを入力して下さい"),
        FieldRules::new("content", |r: &SubmitCommentRequest| r.content.as_str())
            .rule(Rule::Required, "本文は必須入力です")
            .rule(Rule::CharLength { min: 5, max: 50 }, "本文は {min}～{max} 文字です"),
    ])
}
