use anyhow::{Result, anyhow};

/// The parts of an SNS topic ARN the publisher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicArn {
    pub partition: String,
    pub region: String,
    pub account_id: String,
    pub topic_name: String,
}

pub fn validate_topic_arn(arn: &str) -> Result<TopicArn> {
    if arn.is_empty() {
        return Err(anyhow!("Topic ARN cannot be empty"));
    }

    let parts: Vec<&str> = arn.splitn(6, ':').collect();
    if parts.len() != 6 || parts[0] != "arn" {
        return Err(anyhow!("Topic ARN must have the form arn:<partition>:sns:<region>:<account>:<topic>"));
    }

    if parts[2] != "sns" {
        return Err(anyhow!("ARN does not name an SNS resource: service is '{}'", parts[2]));
    }

    if parts[1].is_empty() || parts[3].is_empty() {
        return Err(anyhow!("Topic ARN is missing its partition or region"));
    }

    if parts[4].len() != 12 || !parts[4].chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Topic ARN account id must be 12 digits"));
    }

    let topic_name = parts[5];
    if topic_name.is_empty() || topic_name.len() > 256 {
        return Err(anyhow!("Topic name must be between 1 and 256 characters"));
    }

    let valid_chars = topic_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

    if !valid_chars {
        return Err(anyhow!("Topic name contains invalid characters"));
    }

    Ok(TopicArn {
        partition: parts[1].to_string(),
        region: parts[3].to_string(),
        account_id: parts[4].to_string(),
        topic_name: topic_name.to_string(),
    })
}
