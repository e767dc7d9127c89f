use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactForm, FieldErrors};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug)]
pub enum MailError {
    #[error("missing mail setting {0}")]
    MissingSetting(&'static str),
    #[cfg(feature = "ssr")]
    #[error("couldn't reach mail service: {0}")]
    Http(#[from] reqwest::Error),
    #[error("mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid inquiry: {0}")]
    Invalid(FieldErrors),
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub service: &'a str,
    pub budget: &'a str,
    pub idea: &'a str,
    pub form_name: &'a str,
    pub reply_to: &'a str,
}

impl<'a> TemplateParams<'a> {
    pub fn from_form(form: &'a ContactForm) -> Self {
        Self {
            name: form.name.trim(),
            email: form.email.trim(),
            service: form.service.map(|s| s.as_str()).unwrap_or(""),
            budget: &form.budget,
            idea: &form.idea,
            form_name: form.name.trim(),
            reply_to: form.email.trim(),
        }
    }
}

impl MailConfig {
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, MailError> {
        let var = |key: &'static str| std::env::var(key).map_err(|_| MailError::MissingSetting(key));
        Ok(Self {
            service_id: var("EMAILJS_SERVICE_ID")?,
            template_id: var("EMAILJS_TEMPLATE_ID")?,
            public_key: var("EMAILJS_PUBLIC_KEY")?,
            private_key: std::env::var("EMAILJS_PRIVATE_KEY").ok(),
        })
    }

    pub fn request<'a>(&'a self, form: &'a ContactForm) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: TemplateParams::from_form(form),
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn deliver(config: &MailConfig, form: &ContactForm) -> Result<(), MailError> {
    form.validate().map_err(MailError::Invalid)?;
    let res = reqwest::Client::new()
        .post(EMAILJS_SEND_URL)
        .json(&config.request(form))
        .send()
        .await?;
    let status = res.status();
    if status != http::StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        return Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    tracing::info!("delivered inquiry from {}", form.email.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Service;

    fn config(private_key: Option<&str>) -> MailConfig {
        MailConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk".to_string(),
            private_key: private_key.map(str::to_string),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            service: Some(Service::Mobile),
            budget: "900".to_string(),
            idea: "An app".to_string(),
        }
    }

    #[test]
    fn test_request_body() {
        let config = config(None);
        let form = form();
        let body = serde_json::to_value(config.request(&form)).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pk");
        assert!(body.get("accessToken").is_none());

        let params = &body["template_params"];
        assert_eq!(params["name"], "Ada");
        assert_eq!(params["form_name"], "Ada");
        assert_eq!(params["reply_to"], "ada@example.com");
        assert_eq!(params["service"], "mobile");
        assert_eq!(params["budget"], "900");
        assert_eq!(params["idea"], "An app");
    }

    #[test]
    fn test_private_key_sent_as_access_token() {
        let config = config(Some("secret"));
        let form = form();
        let body = serde_json::to_value(config.request(&form)).unwrap();
        assert_eq!(body["accessToken"], "secret");
    }

    #[test]
    fn test_error_messages() {
        let err = MailError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mail service rejected the message (400): The template ID is invalid"
        );
        let invalid = MailError::Invalid(ContactForm::default().validate().unwrap_err());
        assert!(invalid.to_string().starts_with("invalid inquiry: name:"));
    }
}
