/// The rule set used when neither the command line nor the config names a rule file.
///
/// Keep this small and readable. Site-specific rules belong in a rule file of their own.
pub const BUILTIN_RULES: &str = include_str!("../rules/php-ini.xml");

/// How the built-in rule set is named in reports.
pub const BUILTIN_RULES_NAME: &str = "builtin:php-ini";
