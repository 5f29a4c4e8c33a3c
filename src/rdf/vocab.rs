//! Vocabulary IRIs used by the GRID to VIVO mapping.

/// Prefix/namespace pairs, used to declare namespaces in record-oriented output.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("xsd", xsd::NS),
    ("vivo", vivo::NS),
    ("foaf", foaf::NS),
    ("vcard", vcard::NS),
    ("skos", skos::NS),
    ("obo", obo::NS),
];

pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// VIVO core ontology.
pub mod vivo {
    pub const NS: &str = "http://vivoweb.org/ontology/core#";

    pub const GRID_ID: &str = "http://vivoweb.org/ontology/core#gridId";
    pub const ISNI: &str = "http://vivoweb.org/ontology/core#isni";
    pub const FUND_REF_ID: &str = "http://vivoweb.org/ontology/core#fundRefId";
    pub const ABBREVIATION: &str = "http://vivoweb.org/ontology/core#abbreviation";
    pub const DATE_ESTABLISHED: &str = "http://vivoweb.org/ontology/core#dateEstablished";
    pub const HAS_AFFILIATED_ORGANIZATION: &str =
        "http://vivoweb.org/ontology/core#hasAffiliatedOrganization";
    pub const HAS_SUB_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#hasSubOrganization";
    pub const HAS_SUPER_ORGANIZATION: &str =
        "http://vivoweb.org/ontology/core#hasSuperOrganization";
    pub const HAS_CONTACT_INFO: &str = "http://vivoweb.org/ontology/core#hasContactInfo";
    pub const RANK: &str = "http://vivoweb.org/ontology/core#rank";

    pub const COMPANY: &str = "http://vivoweb.org/ontology/core#Company";
    pub const GOVERNMENT_AGENCY: &str = "http://vivoweb.org/ontology/core#GovernmentAgency";
    pub const HEALTHCARE_ORGANIZATION: &str =
        "http://vivoweb.org/ontology/core#HealthcareOrganization";
    pub const NON_PROFIT_COMPANY: &str = "http://vivoweb.org/ontology/core#NonProfitCompany";
    pub const EDUCATION_ORGANIZATION: &str =
        "http://vivoweb.org/ontology/core#EducationOrganization";
    pub const ARCHIVE_ORGANIZATION: &str = "http://vivoweb.org/ontology/core#ArchiveOrganization";
}

pub mod foaf {
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
}

/// vCard contact-card vocabulary.
pub mod vcard {
    pub const NS: &str = "http://www.w3.org/2006/vcard/ns#";

    pub const ORGANIZATION: &str = "http://www.w3.org/2006/vcard/ns#Organization";
    pub const HAS_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#hasAddress";
    pub const LOCALITY: &str = "http://www.w3.org/2006/vcard/ns#locality";
    pub const POSTAL_CODE: &str = "http://www.w3.org/2006/vcard/ns#postalCode";
    pub const STREET_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#streetAddress";
    pub const REGION: &str = "http://www.w3.org/2006/vcard/ns#region";
    pub const COUNTRY: &str = "http://www.w3.org/2006/vcard/ns#country";
    pub const HAS_GEO: &str = "http://www.w3.org/2006/vcard/ns#hasGeo";
    pub const GEO: &str = "http://www.w3.org/2006/vcard/ns#geo";
    pub const HAS_EMAIL: &str = "http://www.w3.org/2006/vcard/ns#hasEmail";
    pub const EMAIL: &str = "http://www.w3.org/2006/vcard/ns#email";
    pub const HAS_URL: &str = "http://www.w3.org/2006/vcard/ns#hasURL";
    pub const URL: &str = "http://www.w3.org/2006/vcard/ns#url";
}

pub mod skos {
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const RELATED: &str = "http://www.w3.org/2004/02/skos/core#related";
}

/// OBO relation terms for mereology.
pub mod obo {
    pub const NS: &str = "http://purl.obolibrary.org/obo/";
    /// BFO "part of"
    pub const PART_OF: &str = "http://purl.obolibrary.org/obo/BFO_0000050";
    /// BFO "has part"
    pub const HAS_PART: &str = "http://purl.obolibrary.org/obo/BFO_0000051";
}
