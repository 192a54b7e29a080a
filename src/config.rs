use serde::{Deserialize, Serialize};

/// Top-level generator configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub environment: EnvironmentConfig,
    pub players: PlayerConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.environment.validate()?;

        let strategies = self.environment.declared_strategies();

        Self::validate_state("default", &self.players.default, &strategies)?;

        // Individual settings are only consulted when enabled
        if self.players.settings_enabled {
            for (index, entry) in self.players.settings.iter().enumerate() {
                let label = format!("setting {}", index + 1);
                Self::validate_state(&label, &entry.state, &strategies)?;
            }
        }

        Ok(())
    }

    /// Check that a player state has finite scores and only refers to
    /// declared strategies
    fn validate_state(
        label: &str,
        state: &PlayerState,
        strategies: &[&str],
    ) -> Result<(), ValidationError> {
        for (field, value) in [("pre_score", state.pre_score), ("score", state.score)] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidPlayers(format!(
                    "{} {} must be a finite number, got {}",
                    label, field, value
                )));
            }
        }

        for (field, value) in [
            ("pre_strategy", &state.pre_strategy),
            ("strategy", &state.strategy),
        ] {
            if !strategies.contains(&value.as_str()) {
                return Err(ValidationError::InvalidPlayers(format!(
                    "{} uses undeclared {} '{}' (declared: {})",
                    label,
                    field,
                    value,
                    strategies.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Number of players in the simulation
    pub fn player_count(&self) -> usize {
        self.environment.unit
    }
}

/// Simulation environment parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnvironmentConfig {
    /// Number of players
    pub unit: usize,
    pub step: u64,
    pub strategy_update_cycle: u64,
    /// Topology name, resolved at build time
    pub topology: String,
    #[serde(default)]
    pub self_interaction: bool,
    pub payoff: Payoff,
    pub strategies: Vec<String>,
    /// Number of random numbers generated before the run starts
    #[serde(default)]
    pub generated_rand: u64,
}

impl EnvironmentConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.unit == 0 {
            return Err(ValidationError::InvalidEnvironment(
                "unit must be at least 1".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(ValidationError::InvalidEnvironment(
                "step must be at least 1".to_string(),
            ));
        }
        if self.strategy_update_cycle == 0 {
            return Err(ValidationError::InvalidEnvironment(
                "strategy_update_cycle must be at least 1".to_string(),
            ));
        }
        if self.topology.trim().is_empty() {
            return Err(ValidationError::InvalidEnvironment(
                "topology cannot be empty".to_string(),
            ));
        }

        for (name, value) in self.payoff.entries() {
            if !value.is_finite() {
                return Err(ValidationError::InvalidEnvironment(format!(
                    "payoff {} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if self.declared_strategies().is_empty() {
            return Err(ValidationError::InvalidEnvironment(
                "at least one strategy must be declared".to_string(),
            ));
        }

        Ok(())
    }

    /// Strategy names with blank entries filtered out
    pub fn declared_strategies(&self) -> Vec<&str> {
        self.strategies
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Prisoner's dilemma payoff matrix
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Payoff {
    /// Reward for mutual cooperation
    pub r: f64,
    /// Sucker's payoff
    pub s: f64,
    /// Temptation to defect
    pub t: f64,
    /// Punishment for mutual defection
    pub p: f64,
}

impl Payoff {
    fn entries(&self) -> [(&'static str, f64); 4] {
        [("R", self.r), ("S", self.s), ("T", self.t), ("P", self.p)]
    }
}

/// Player state settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerConfig {
    #[serde(default)]
    pub settings_enabled: bool,
    pub default: PlayerState,
    #[serde(default)]
    pub settings: Vec<SettingEntry>,
}

/// The state values written onto a player node
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerState {
    pub pre_action: String,
    pub action: String,
    pub pre_score: f64,
    pub score: f64,
    pub pre_strategy: String,
    pub strategy: String,
}

/// A player state applied to a range of players
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SettingEntry {
    /// Comma separated indices and half-open ranges, e.g. `"0-4, 9"`
    pub target: String,
    #[serde(flatten)]
    pub state: PlayerState,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid environment configuration: {0}")]
    InvalidEnvironment(String),
    #[error("Invalid player configuration: {0}")]
    InvalidPlayers(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
environment:
  unit: 16
  step: 100
  strategy_update_cycle: 1
  topology: Moore
  payoff: { r: 1.0, s: 0.0, t: 1.5, p: 0.0 }
  strategies: [ALLC, ALLD]
players:
  default:
    pre_action: C
    action: C
    pre_score: 0.0
    score: 0.0
    pre_strategy: ALLC
    strategy: ALLC
"#;

    #[test]
    fn test_config_parsing() {
        let config: Config = serde_yaml::from_str(BASE).unwrap();
        assert_eq!(config.player_count(), 16);
        assert_eq!(config.environment.topology, "Moore");
        assert!(!config.environment.self_interaction);
        assert_eq!(config.environment.generated_rand, 0);
        assert!(!config.players.settings_enabled);
        assert!(config.players.settings.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setting_entry_flattened() {
        let yaml = r#"
target: "0-4, 9"
pre_action: D
action: D
pre_score: 1.5
score: 2.0
pre_strategy: ALLD
strategy: ALLD
"#;
        let entry: SettingEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.target, "0-4, 9");
        assert_eq!(entry.state.action, "D");
        assert_eq!(entry.state.score, 2.0);
    }

    #[test]
    fn test_environment_validation() {
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.unit = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEnvironment(_))
        ));

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.step = 0;
        assert!(config.validate().is_err());

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.strategy_update_cycle = 0;
        assert!(config.validate().is_err());

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.payoff.t = f64::NAN;
        assert!(config.validate().is_err());

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.strategies = vec![" ".to_string(), String::new()];
        assert!(config.validate().is_err());

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.topology = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_scores_rejected() {
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.players.default.score = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPlayers(_))
        ));

        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.players.default.pre_score = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default pre_score"));

        // YAML special floats parse, so validation has to catch them
        let yaml = BASE.replace("    score: 0.0", "    score: .nan");
        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert!(config.players.default.score.is_nan());
        assert!(config.validate().is_err());

        // Enabled settings are held to the same rule
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        let mut state = config.players.default.clone();
        state.pre_score = f64::NEG_INFINITY;
        config.players.settings_enabled = true;
        config.players.settings.push(SettingEntry {
            target: "0".to_string(),
            state,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("setting 1 pre_score"));
    }

    #[test]
    fn test_unknown_topology_name_passes_validation() {
        // Unknown topologies are reported by the generator, not here
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.environment.topology = "Hypercube".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_undeclared_strategy() {
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        config.players.default.strategy = "TFT".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPlayers(_))
        ));
    }

    #[test]
    fn test_disabled_settings_not_validated() {
        let mut config: Config = serde_yaml::from_str(BASE).unwrap();
        let mut state = config.players.default.clone();
        state.pre_strategy = "TFT".to_string();
        config.players.settings.push(SettingEntry {
            target: "0".to_string(),
            state,
        });

        assert!(config.validate().is_ok());

        config.players.settings_enabled = true;
        assert!(config.validate().is_err());
    }
}
