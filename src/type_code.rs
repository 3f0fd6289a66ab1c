use std::fmt;

/// NDN TLV type numbers used by Name and Data packets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Data,
    Name,
    NameComponent,
    MetaInfo,
    Content,
    SignatureInfo,
    SignatureValue,
    ContentType,
    FreshnessPeriod,
    SignatureType,
    KeyLocator,
}

impl TypeCode {
    /// Construct a type code from its wire number, if it is one this crate knows about.
    pub fn from_u64(n: u64) -> Option<TypeCode> {
        use self::TypeCode::*;
        Some(match n {
            6 => Data,
            7 => Name,
            8 => NameComponent,
            20 => MetaInfo,
            21 => Content,
            22 => SignatureInfo,
            23 => SignatureValue,
            24 => ContentType,
            25 => FreshnessPeriod,
            27 => SignatureType,
            28 => KeyLocator,
            _ => return None,
        })
    }

    pub fn into_u64(self) -> u64 {
        use self::TypeCode::*;
        match self {
            Data => 6,
            Name => 7,
            NameComponent => 8,
            MetaInfo => 20,
            Content => 21,
            SignatureInfo => 22,
            SignatureValue => 23,
            ContentType => 24,
            FreshnessPeriod => 25,
            SignatureType => 27,
            KeyLocator => 28,
        }
    }

    /// True if blocks of this type hold child blocks instead of raw bytes.
    pub fn is_nested(self) -> bool {
        use self::TypeCode::*;
        matches!(self, Data | Name | MetaInfo | SignatureInfo | KeyLocator)
    }

    /// Check a raw type number. Unknown types are never nested.
    pub fn is_nested_type(n: u64) -> bool {
        TypeCode::from_u64(n).map_or(false, TypeCode::is_nested)
    }

    pub fn name(self) -> &'static str {
        use self::TypeCode::*;
        match self {
            Data => "Data",
            Name => "Name",
            NameComponent => "NameComponent",
            MetaInfo => "MetaInfo",
            Content => "Content",
            SignatureInfo => "SignatureInfo",
            SignatureValue => "SignatureValue",
            ContentType => "ContentType",
            FreshnessPeriod => "FreshnessPeriod",
            SignatureType => "SignatureType",
            KeyLocator => "KeyLocator",
        }
    }
}

impl From<TypeCode> for u64 {
    fn from(val: TypeCode) -> u64 {
        val.into_u64()
    }
}

impl TryFrom<u64> for TypeCode {
    type Error = u64;
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        TypeCode::from_u64(n).ok_or(n)
    }
}

impl PartialEq<u64> for TypeCode {
    fn eq(&self, other: &u64) -> bool {
        self.into_u64() == *other
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.into_u64())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL: [TypeCode; 11] = [
        TypeCode::Data,
        TypeCode::Name,
        TypeCode::NameComponent,
        TypeCode::MetaInfo,
        TypeCode::Content,
        TypeCode::SignatureInfo,
        TypeCode::SignatureValue,
        TypeCode::ContentType,
        TypeCode::FreshnessPeriod,
        TypeCode::SignatureType,
        TypeCode::KeyLocator,
    ];

    #[test]
    fn distinct_and_reversible() {
        let mut seen = std::collections::HashSet::new();
        for code in ALL {
            let n = u64::from(code);
            assert!(seen.insert(n), "{} reused wire number {}", code.name(), n);
            assert_eq!(TypeCode::try_from(n), Ok(code));
        }
    }

    #[test]
    fn unknown() {
        assert_eq!(TypeCode::try_from(5u64), Err(5));
        assert!(!TypeCode::is_nested_type(5));
        assert!(!TypeCode::is_nested_type(0xfd00));
    }

    #[test]
    fn nesting() {
        let nested: Vec<_> = ALL.iter().filter(|c| c.is_nested()).map(|c| c.name()).collect();
        assert_eq!(
            nested,
            vec!["Data", "Name", "MetaInfo", "SignatureInfo", "KeyLocator"]
        );
    }
}
