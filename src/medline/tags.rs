//! MEDLINE field tags and the tag sets that end multi-line fields.
//!
//! A tag is a short upper-case code padded with spaces to four columns and
//! followed by `-`, e.g. `TI  -` or `COIS-`. Continuation lines carry no tag;
//! they are indented by six spaces.

/// Literal that starts every record and precedes its PMID.
pub const RECORD_MARKER: &str = "PMID- ";

/// Indentation that marks a line as the continuation of the previous field.
pub const CONTINUATION_INDENT: &str = "      ";

/// MEDLINE tags known to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedlineTag {
    /// PMID - PubMed unique identifier
    PubmedId,
    /// DP - Date of publication
    PublicationDate,
    /// TI - Title
    Title,
    /// AB - Abstract
    Abstract,
    /// CI - Copyright information
    CopyrightInformation,
    /// LID - Location identifier
    LocationId,
    /// FAU - Full author name
    FullAuthorName,
    /// AU - Author
    Author,
    /// AD - Affiliation
    Affiliation,
    /// LA - Language
    Language,
    /// PT - Publication type
    PublicationType,
    /// DEP - Date of electronic publication
    ElectronicPublicationDate,
    /// PL - Place of publication
    PlaceOfPublication,
    /// TA - Journal title abbreviation
    JournalTitleAbbreviation,
    /// JT - Full journal title
    FullJournalTitle,
    /// JID - NLM unique journal identifier
    NlmUniqueId,
    /// SB - Journal subset
    Subset,
    /// MH - MeSH terms
    MeshTerms,
    /// RN - Registry number / EC number
    RegistryNumber,
    /// PMC - PubMed Central identifier
    PubmedCentralId,
    /// OTO - Other term owner
    OtherTermOwner,
    /// OT - Other term
    OtherTerm,
    /// COIS - Conflict of interest statement
    ConflictOfInterest,
    /// EDAT - Entrez date
    EntrezDate,
    /// MHDA - MeSH date
    MeshDate,
    /// PMCR - PubMed Central release
    PmcRelease,
    /// CRDT - Create date
    CreateDate,
    /// PHST - Publication history status
    PublicationHistory,
    /// AID - Article identifier
    ArticleIdentifier,
    /// PST - Publication status
    PublicationStatus,
    /// SO - Source
    Source,
}

impl MedlineTag {
    /// The tag as it appears at the start of a line, padded and including `-`.
    pub const fn prefix(self) -> &'static str {
        match self {
            MedlineTag::PubmedId => "PMID-",
            MedlineTag::PublicationDate => "DP  -",
            MedlineTag::Title => "TI  -",
            MedlineTag::Abstract => "AB  -",
            MedlineTag::CopyrightInformation => "CI  -",
            MedlineTag::LocationId => "LID -",
            MedlineTag::FullAuthorName => "FAU -",
            MedlineTag::Author => "AU  -",
            MedlineTag::Affiliation => "AD  -",
            MedlineTag::Language => "LA  -",
            MedlineTag::PublicationType => "PT  -",
            MedlineTag::ElectronicPublicationDate => "DEP -",
            MedlineTag::PlaceOfPublication => "PL  -",
            MedlineTag::JournalTitleAbbreviation => "TA  -",
            MedlineTag::FullJournalTitle => "JT  -",
            MedlineTag::NlmUniqueId => "JID -",
            MedlineTag::Subset => "SB  -",
            MedlineTag::MeshTerms => "MH  -",
            MedlineTag::RegistryNumber => "RN  -",
            MedlineTag::PubmedCentralId => "PMC -",
            MedlineTag::OtherTermOwner => "OTO -",
            MedlineTag::OtherTerm => "OT  -",
            MedlineTag::ConflictOfInterest => "COIS-",
            MedlineTag::EntrezDate => "EDAT-",
            MedlineTag::MeshDate => "MHDA-",
            MedlineTag::PmcRelease => "PMCR-",
            MedlineTag::CreateDate => "CRDT-",
            MedlineTag::PublicationHistory => "PHST-",
            MedlineTag::ArticleIdentifier => "AID -",
            MedlineTag::PublicationStatus => "PST -",
            MedlineTag::Source => "SO  -",
        }
    }

    /// The bare tag code, e.g. `LID`.
    pub fn code(self) -> &'static str {
        self.prefix().trim_end_matches('-').trim_end()
    }

    /// Whether `line` (already trimmed) begins with this tag.
    pub fn starts(self, line: &str) -> bool {
        line.starts_with(self.prefix())
    }

    /// The value of a trimmed `TAG - value` line, if `line` carries this tag.
    ///
    /// The value must be separated from the dash by a space, so a bare
    /// `TAG  -` line does not carry the tag.
    pub fn value_of(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.prefix())?
            .strip_prefix(' ')
            .map(str::trim)
    }
}

/// Tags that end a title or an abstract continuation.
pub const SHARED_STOP_TAGS: [MedlineTag; 25] = [
    MedlineTag::FullAuthorName,
    MedlineTag::Author,
    MedlineTag::Affiliation,
    MedlineTag::Language,
    MedlineTag::PublicationType,
    MedlineTag::ElectronicPublicationDate,
    MedlineTag::PlaceOfPublication,
    MedlineTag::JournalTitleAbbreviation,
    MedlineTag::FullJournalTitle,
    MedlineTag::NlmUniqueId,
    MedlineTag::Subset,
    MedlineTag::MeshTerms,
    MedlineTag::RegistryNumber,
    MedlineTag::PubmedCentralId,
    MedlineTag::OtherTermOwner,
    MedlineTag::OtherTerm,
    MedlineTag::ConflictOfInterest,
    MedlineTag::EntrezDate,
    MedlineTag::MeshDate,
    MedlineTag::PmcRelease,
    MedlineTag::CreateDate,
    MedlineTag::PublicationHistory,
    MedlineTag::ArticleIdentifier,
    MedlineTag::PublicationStatus,
    MedlineTag::Source,
];

/// Tags that end a title continuation: the abstract and copyright tags plus the shared set.
pub const TITLE_STOP_TAGS: [MedlineTag; 27] = [
    MedlineTag::Abstract,
    MedlineTag::CopyrightInformation,
    MedlineTag::FullAuthorName,
    MedlineTag::Author,
    MedlineTag::Affiliation,
    MedlineTag::Language,
    MedlineTag::PublicationType,
    MedlineTag::ElectronicPublicationDate,
    MedlineTag::PlaceOfPublication,
    MedlineTag::JournalTitleAbbreviation,
    MedlineTag::FullJournalTitle,
    MedlineTag::NlmUniqueId,
    MedlineTag::Subset,
    MedlineTag::MeshTerms,
    MedlineTag::RegistryNumber,
    MedlineTag::PubmedCentralId,
    MedlineTag::OtherTermOwner,
    MedlineTag::OtherTerm,
    MedlineTag::ConflictOfInterest,
    MedlineTag::EntrezDate,
    MedlineTag::MeshDate,
    MedlineTag::PmcRelease,
    MedlineTag::CreateDate,
    MedlineTag::PublicationHistory,
    MedlineTag::ArticleIdentifier,
    MedlineTag::PublicationStatus,
    MedlineTag::Source,
];

/// Tags that end an abstract continuation.
pub const ABSTRACT_STOP_TAGS: [MedlineTag; 25] = SHARED_STOP_TAGS;

/// A field whose value may continue over indented lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuedField {
    Title,
    Abstract,
}

impl ContinuedField {
    /// Tag that opens the field.
    pub const fn tag(self) -> MedlineTag {
        match self {
            ContinuedField::Title => MedlineTag::Title,
            ContinuedField::Abstract => MedlineTag::Abstract,
        }
    }

    /// Tag that normally follows the field and is checked before anything else.
    pub const fn boundary(self) -> MedlineTag {
        match self {
            ContinuedField::Title => MedlineTag::LocationId,
            ContinuedField::Abstract => MedlineTag::CopyrightInformation,
        }
    }

    /// Every other tag that ends the continuation.
    pub fn stop_tags(self) -> &'static [MedlineTag] {
        match self {
            ContinuedField::Title => &TITLE_STOP_TAGS,
            ContinuedField::Abstract => &ABSTRACT_STOP_TAGS,
        }
    }

    /// Whether a trimmed line ends the continuation of this field.
    pub fn is_stopped_by(self, line: &str) -> bool {
        self.stop_tags().iter().any(|tag| tag.starts(line))
    }
}
