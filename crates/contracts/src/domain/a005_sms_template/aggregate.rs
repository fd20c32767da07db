use serde::{Deserialize, Serialize};

/// Notification template as served by `GET /sms-templates`.
///
/// `body` may carry `{placeholder}` markers substituted by the backend at
/// send time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsTemplate {
    pub id: String,
    /// Stable template key the backend dispatches by, e.g. "request-approved".
    pub key: String,
    pub title: String,
    pub body: String,
    pub is_active: bool,
}

impl SmsTemplate {
    /// Validate operator edits before a PATCH.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Template title must not be empty".to_string());
        }
        if self.body.trim().is_empty() {
            return Err("Template body must not be empty".to_string());
        }
        let mut depth = 0i32;
        for c in self.body.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err("Template body has unbalanced {placeholder} braces".to_string());
        }
        Ok(())
    }
}

/// Envelope of `GET /sms-templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsTemplatesResponse {
    pub success: bool,
    #[serde(default)]
    pub templates: Vec<SmsTemplate>,
}

/// Body of `PATCH /sms-templates/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSmsTemplateRequest {
    pub title: String,
    pub body: String,
    pub is_active: bool,
}

/// Envelope of `PATCH /sms-templates/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSmsTemplateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str) -> SmsTemplate {
        SmsTemplate {
            id: "t1".to_string(),
            key: "request-approved".to_string(),
            title: "Request approved".to_string(),
            body: body.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn valid_template_passes() {
        assert!(template("Dear {customer}, request {reference} was approved.")
            .validate()
            .is_ok());
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(template("   ").validate().is_err());
    }

    #[test]
    fn unbalanced_placeholders_are_rejected() {
        assert!(template("Dear {customer, hello").validate().is_err());
        assert!(template("Stray } brace {ok}").validate().is_err());
    }
}
