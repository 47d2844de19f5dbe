use crate::entity_id::entity_id;

entity_id! {
    /// The id of a file.
    FileId, FileId, file_num
}

impl FileId {
    /// The address book file.
    pub const ADDRESS_BOOK: Self = Self::new(0, 0, 102);
    /// The fee schedule file.
    pub const FEE_SCHEDULE: Self = Self::new(0, 0, 111);
    /// The exchange rate file.
    pub const EXCHANGE_RATES: Self = Self::new(0, 0, 112);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_files() {
        assert_eq!(FileId::ADDRESS_BOOK.to_string(), "0.0.102");
        assert_eq!("0.0.112".parse::<FileId>().unwrap(), FileId::EXCHANGE_RATES);
    }

    #[test]
    fn test_bytes_round_trip() {
        let id = FileId::new(1, 2, 3);
        assert_eq!(FileId::from_bytes(&id.to_bytes()).unwrap(), id);
    }
}
