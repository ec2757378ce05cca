use std::fmt::Display;

pub enum EnvVariable {
    TabWidth,
    ConfigPath,
    CheckerPath,
}

impl Display for EnvVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            EnvVariable::TabWidth => "MIPSFMT_TAB_WIDTH",
            EnvVariable::ConfigPath => "MIPSFMT_CONFIG",
            EnvVariable::CheckerPath => "MIPSFMT_CHECKER",
        })
    }
}
