use clap::Parser;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Study tracker statistics server
#[derive(Parser, Debug, Clone)]
#[command(name = "Study Tracker")]
#[command(about = "Serve study progress statistics over HTTP", long_about = None)]
#[command(version)]
pub struct Args {
    /// Use in-memory database for testing
    #[arg(long, help = "Use in-memory database for testing")]
    pub test: bool,

    /// Custom database file path
    #[arg(long, value_name = "PATH", help = "Use custom database file path")]
    pub db_path: Option<PathBuf>,

    /// Override current date for testing (YYYY-MM-DD format)
    #[arg(
        long,
        value_name = "DATE",
        help = "Override current date (YYYY-MM-DD format)"
    )]
    pub override_date: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Vocabulary seed file(s) imported before serving
    #[arg(long = "seed", value_name = "FILE")]
    pub seed: Vec<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the override_date argument if provided
    pub fn validate_override_date(&self) -> Result<Option<NaiveDate>, String> {
        match &self.override_date {
            Some(date_str) => {
                NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                    .map(Some)
                    .map_err(|_| {
                        format!(
                            "Invalid date format for --override-date: '{}'. Expected YYYY-MM-DD",
                            date_str
                        )
                    })
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(override_date: Option<&str>) -> Args {
        Args {
            test: false,
            db_path: None,
            override_date: override_date.map(str::to_string),
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed: vec![],
        }
    }

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["study_tracker"]).unwrap();
        assert!(!args.test);
        assert!(args.db_path.is_none());
        assert!(args.override_date.is_none());
        assert!(args.seed.is_empty());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "study_tracker",
            "--test",
            "--db-path",
            "/tmp/test.db",
            "--override-date",
            "2024-06-15",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--seed",
            "greetings.json",
            "--seed",
            "numbers.json",
        ])
        .unwrap();

        assert!(args.test);
        assert_eq!(args.db_path.as_deref(), Some(PathBuf::from("/tmp/test.db").as_path()));
        assert_eq!(args.override_date, Some("2024-06-15".to_string()));
        assert_eq!(args.bind_addr(), "127.0.0.1:3000");
        assert_eq!(
            args.seed,
            vec![PathBuf::from("greetings.json"), PathBuf::from("numbers.json")]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Args::try_parse_from(["study_tracker", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_validate_override_date_valid() {
        let result = args(Some("2024-01-15")).validate_override_date();
        assert_eq!(
            result.unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_validate_override_date_invalid_format() {
        let result = args(Some("2024/01/15")).validate_override_date();
        assert!(result.unwrap_err().contains("Invalid date format"));
    }

    #[test]
    fn test_validate_override_date_invalid_date() {
        assert!(args(Some("2024-13-01")).validate_override_date().is_err());
    }

    #[test]
    fn test_validate_override_date_none() {
        assert_eq!(args(None).validate_override_date().unwrap(), None);
    }
}
