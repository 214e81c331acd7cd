use std::collections::BTreeMap;

/// `Key='value'` fields of a stack event message.
///
/// Only used to enrich logs. Lines that don't look like a field are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackNotification {
    fields: BTreeMap<String, String>,
}

impl StackNotification {
    pub fn parse(message: &str) -> Self {
        let fields = message
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                if key.is_empty() || key.contains(char::is_whitespace) {
                    return None;
                }

                let value = value.trim();
                let value = value
                    .strip_prefix('\'')
                    .and_then(|v| v.strip_suffix('\''))
                    .unwrap_or(value);

                Some((key.to_string(), value.to_string()))
            })
            .collect();

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn stack_name(&self) -> Option<&str> {
        self.get("StackName")
    }

    pub fn logical_resource_id(&self) -> Option<&str> {
        self.get("LogicalResourceId")
    }

    pub fn resource_status(&self) -> Option<&str> {
        self.get("ResourceStatus")
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.get("ResourceType")
    }
}
