use std::env;

const DEFAULT_SLOTS: &str = "10:00,11:00,12:00";
const DEFAULT_SEED_DATES: &str = "2026-01-20,2026-01-21";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    /// Free slots every date starts with.
    pub default_slots: Vec<String>,
    /// Dates materialized from the template at startup.
    pub seed_dates: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8000".to_string());

        let default_slots =
            split_list(&lookup("DEFAULT_SLOTS").unwrap_or_else(|| DEFAULT_SLOTS.to_string()));
        if default_slots.is_empty() {
            anyhow::bail!("DEFAULT_SLOTS must name at least one time slot");
        }

        let seed_dates =
            split_list(&lookup("SEED_DATES").unwrap_or_else(|| DEFAULT_SEED_DATES.to_string()));

        Ok(Self {
            bind_addr,
            default_slots,
            seed_dates,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8000");
        assert_eq!(cfg.default_slots, vec!["10:00", "11:00", "12:00"]);
        assert_eq!(cfg.seed_dates, vec!["2026-01-20", "2026-01-21"]);
    }

    #[test]
    fn lists_are_trimmed_and_skip_blanks() {
        let cfg = config(&[
            ("DEFAULT_SLOTS", " 09:00, ,10:00 ,"),
            ("SEED_DATES", ""),
            ("BIND_ADDR", "0.0.0.0:9000"),
        ])
        .unwrap();
        assert_eq!(cfg.default_slots, vec!["09:00", "10:00"]);
        assert!(cfg.seed_dates.is_empty());
        assert_eq!(cfg.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn empty_slot_template_is_rejected() {
        assert!(config(&[("DEFAULT_SLOTS", " , ")]).is_err());
    }
}
