//! Legacy classful address classes.

use crate::error::SubnetError;
use serde::Serialize;
use std::fmt;

/// Address class A to E, decided by the leading octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// Class of an address whose first octet is `octet`.
    pub fn from_leading_octet(octet: u8) -> AddressClass {
        match octet {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
        }
    }

    /// Prefix length of the class's classful network; D and E have none.
    pub fn natural_prefix(&self) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            AddressClass::D | AddressClass::E => None,
        }
    }
}

impl TryFrom<u16> for AddressClass {
    type Error = SubnetError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(AddressClass::from_leading_octet)
            .map_err(|_| SubnetError::InvalidAddressClass(value))
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(letter)
    }
}

/// Class of an address together with whether its prefix is the classful one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub class: AddressClass,
    pub classful: bool,
}

impl ClassInfo {
    pub fn new(leading_octet: u8, prefix_len: u8) -> ClassInfo {
        let class = AddressClass::from_leading_octet(leading_octet);
        ClassInfo {
            class,
            classful: class.natural_prefix() == Some(prefix_len),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.classful {
            "CLASSFULL"
        } else {
            "CLASSLESS"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries() {
        assert_eq!(AddressClass::from_leading_octet(0), AddressClass::A);
        assert_eq!(AddressClass::from_leading_octet(127), AddressClass::A);
        assert_eq!(AddressClass::from_leading_octet(128), AddressClass::B);
        assert_eq!(AddressClass::from_leading_octet(191), AddressClass::B);
        assert_eq!(AddressClass::from_leading_octet(192), AddressClass::C);
        assert_eq!(AddressClass::from_leading_octet(223), AddressClass::C);
        assert_eq!(AddressClass::from_leading_octet(224), AddressClass::D);
        assert_eq!(AddressClass::from_leading_octet(239), AddressClass::D);
        assert_eq!(AddressClass::from_leading_octet(240), AddressClass::E);
        assert_eq!(AddressClass::from_leading_octet(255), AddressClass::E);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(AddressClass::try_from(10u16).unwrap(), AddressClass::A);
        assert_eq!(AddressClass::try_from(255u16).unwrap(), AddressClass::E);
        assert!(matches!(
            AddressClass::try_from(256u16),
            Err(SubnetError::InvalidAddressClass(256))
        ));
    }

    #[test]
    fn test_classful() {
        assert!(ClassInfo::new(10, 8).classful);
        assert!(ClassInfo::new(172, 16).classful);
        assert!(ClassInfo::new(192, 24).classful);
        assert!(!ClassInfo::new(10, 16).classful);
        assert!(!ClassInfo::new(192, 20).classful);
        assert_eq!(ClassInfo::new(192, 24).label(), "CLASSFULL");
        assert_eq!(ClassInfo::new(192, 25).label(), "CLASSLESS");
    }

    #[test]
    fn test_d_and_e_never_classful() {
        for prefix in 0..=32 {
            assert!(!ClassInfo::new(224, prefix).classful);
            assert!(!ClassInfo::new(250, prefix).classful);
        }
    }
}
