use strum::{EnumIter, EnumString, IntoStaticStr};

/// Argument prefixes understood by the score command parser
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Prefix {
    #[strum(serialize = "n/")]
    Name,
    #[strum(serialize = "v/")]
    Value,
    #[strum(serialize = "d/")]
    Date,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
