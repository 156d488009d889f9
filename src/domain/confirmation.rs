use crate::domain::VhostConfig;

/// Whether an operator answer allows the run to continue.
///
/// Only "y" counts, ignoring surrounding whitespace and case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Settings summary shown before asking for confirmation.
pub fn summary(config: &VhostConfig) -> String {
    format!(
        "\nDomain:             {}\ndestination-dir:    {}\nwww-user:           {}\nwww-group:          {}\n",
        config.domain,
        config.destination_root.display(),
        config.www_user,
        config.www_group,
    )
}
