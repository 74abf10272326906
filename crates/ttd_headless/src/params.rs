use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("invalid value for driver parameter '{name}': {value:?}")]
    InvalidParam { name: String, value: Option<String> },
    #[error("unknown video driver '{0}'")]
    UnknownDriver(String),
}

/// `name=value` options given to a driver, e.g. `ticks=500`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverParams {
    items: Vec<(String, Option<String>)>,
}

impl DriverParams {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .filter_map(|item| {
                let item = item.as_ref().trim();
                if item.is_empty() {
                    return None;
                }
                Some(match item.split_once('=') {
                    Some((name, value)) => (name.to_string(), Some(value.to_string())),
                    None => (item.to_string(), None),
                })
            })
            .collect();
        Self { items }
    }

    /// Splits a driver selection such as `null:ticks=50,foo` into the driver
    /// name and its parameters.
    pub fn parse_selection(selection: &str) -> (String, Self) {
        match selection.split_once(':') {
            Some((name, params)) => (name.trim().to_string(), Self::new(params.split(','))),
            None => (selection.trim().to_string(), Self::default()),
        }
    }

    /// Whether `name` is present, with or without a value.
    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|(n, _)| n == name)
    }

    /// Raw value of `name`; `Some(None)` when it is given without a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_deref())
    }

    /// Integer parameter with a default. Present without a number is an error.
    pub fn int(&self, name: &str, default: u32) -> Result<u32, DriverError> {
        match self.get(name) {
            None => Ok(default),
            Some(Some(value)) => value.trim().parse().map_err(|_| DriverError::InvalidParam {
                name: name.to_string(),
                value: Some(value.to_string()),
            }),
            Some(None) => Err(DriverError::InvalidParam {
                name: name.to_string(),
                value: None,
            }),
        }
    }
}
