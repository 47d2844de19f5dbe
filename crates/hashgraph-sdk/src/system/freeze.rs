use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{FileId, LedgerId, Result};

/// Freeze the network, optionally staging or applying an upgrade.
///
/// Only accepted from privileged system accounts.
pub type FreezeTransaction = Transaction<FreezeTransactionData>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FreezeType {
    #[default]
    Unknown,
    FreezeOnly,
    /// Stage the upgrade file without freezing.
    PrepareUpgrade,
    /// Freeze and apply the staged upgrade.
    FreezeUpgrade,
    FreezeAbort,
    TelemetryUpgrade,
}

impl From<i32> for FreezeType {
    fn from(code: i32) -> Self {
        use services::FreezeType as Pb;

        match Pb::try_from(code) {
            Ok(Pb::FreezeOnly) => Self::FreezeOnly,
            Ok(Pb::PrepareUpgrade) => Self::PrepareUpgrade,
            Ok(Pb::FreezeUpgrade) => Self::FreezeUpgrade,
            Ok(Pb::FreezeAbort) => Self::FreezeAbort,
            Ok(Pb::TelemetryUpgrade) => Self::TelemetryUpgrade,
            Ok(Pb::UnknownFreezeType) | Err(_) => Self::Unknown,
        }
    }
}

impl From<FreezeType> for i32 {
    fn from(kind: FreezeType) -> Self {
        use services::FreezeType as Pb;

        let pb = match kind {
            FreezeType::Unknown => Pb::UnknownFreezeType,
            FreezeType::FreezeOnly => Pb::FreezeOnly,
            FreezeType::PrepareUpgrade => Pb::PrepareUpgrade,
            FreezeType::FreezeUpgrade => Pb::FreezeUpgrade,
            FreezeType::FreezeAbort => Pb::FreezeAbort,
            FreezeType::TelemetryUpgrade => Pb::TelemetryUpgrade,
        };

        pb as i32
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreezeTransactionData {
    start_time: Option<DateTime<Utc>>,
    file_id: Option<FileId>,
    file_hash: Vec<u8>,
    freeze_type: FreezeType,
}

impl FreezeTransaction {
    pub fn get_start_time(&self) -> Option<DateTime<Utc>> {
        self.data().start_time
    }

    pub fn start_time(&mut self, at: DateTime<Utc>) -> Result<&mut Self> {
        self.data_mut()?.start_time = Some(at);
        Ok(self)
    }

    pub fn get_file_id(&self) -> Option<FileId> {
        self.data().file_id
    }

    /// File holding the upgrade package.
    pub fn file_id(&mut self, id: impl Into<FileId>) -> Result<&mut Self> {
        self.data_mut()?.file_id = Some(id.into());
        Ok(self)
    }

    pub fn get_file_hash(&self) -> &[u8] {
        &self.data().file_hash
    }

    /// SHA-384 of the upgrade file contents.
    pub fn file_hash(&mut self, hash: impl Into<Vec<u8>>) -> Result<&mut Self> {
        self.data_mut()?.file_hash = hash.into();
        Ok(self)
    }

    pub fn get_freeze_type(&self) -> FreezeType {
        self.data().freeze_type
    }

    pub fn freeze_type(&mut self, kind: FreezeType) -> Result<&mut Self> {
        self.data_mut()?.freeze_type = kind;
        Ok(self)
    }
}

impl TransactionData for FreezeTransactionData {}

impl ValidateChecksums for FreezeTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.file_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FreezeTransactionBody> for FreezeTransactionData {
    fn from_protobuf(pb: services::FreezeTransactionBody) -> Result<Self> {
        Ok(Self {
            start_time: Option::from_protobuf(pb.start_time)?,
            file_id: Option::from_protobuf(pb.update_file)?,
            file_hash: pb.file_hash,
            freeze_type: FreezeType::from(pb.freeze_type),
        })
    }
}

impl ToProtobuf for FreezeTransactionData {
    type Protobuf = services::FreezeTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FreezeTransactionBody {
            update_file: self.file_id.map(|id| id.to_protobuf()),
            file_hash: self.file_hash.clone(),
            start_time: self.start_time.as_ref().map(DateTime::to_protobuf),
            freeze_type: self.freeze_type.into(),
        }
    }
}
