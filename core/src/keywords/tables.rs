//! Built-in keyword tables.

/// Healthcare and drug-discovery vocabulary.
#[rustfmt::skip]
pub const HEALTHCARE_KEYWORDS: &[&str] = &[
    "healthcare", "health", "medicine", "drug", "pharmaceutical", "clinical", "trial",
    "patient", "patients", "disease", "diseases", "treatment", "treatments", "therapy", "therapies",
    "diagnosis", "diagnostic", "diagnostics", "vaccine", "vaccination", "biotechnology", "biotech",
    "genomics", "proteomics", "transcriptomics", "metabolomics", "drug discovery", "drug design",
    "drug screening", "compound library", "target validation", "assay", "high-throughput screening",
    "lead optimization", "admet", "toxicity", "toxicology", "efficacy", "pharmacology",
    "pharmacokinetics", "pharmacodynamics", "therapeutics", "hospital", "hospitals", "clinical trial",
    "preclinical", "molecular docking", "qsar", "structure-activity relationship", "bioavailability",
    "ligand", "protein", "receptor", "enzyme", "biomarker", "rna", "dna", "mutagenesis",
    "cell line", "animal model", "in vitro", "in vivo", "in silico", "pathway", "mechanism of action",
];

/// Topics that are never allowed, even alongside healthcare vocabulary.
#[rustfmt::skip]
pub const DENIED_KEYWORDS: &[&str] = &[
    "politics", "political", "election", "elections", "government", "policy", "president",
    "sports", "sport", "football", "soccer", "basketball", "baseball", "cricket", "tennis", "olympics",
    "entertainment", "movie", "movies", "film", "films", "cinema", "music", "concert", "celebrity", "celebrities",
    "gaming", "video game", "video games", "esports", "streaming", "netflix", "hbo", "disney", "tv show", "tv series",
    "gossip", "drama", "reality show", "theater", "cartoon", "anime",
];

/// Extra terms accepted by the search front-end's domain guard on top of
/// [`HEALTHCARE_KEYWORDS`].
#[rustfmt::skip]
pub const SEARCH_DOMAIN_KEYWORDS: &[&str] = &[
    "compound", "inhibitor", "molecule", "bioactivity", "therapeutic", "target", "side effect",
    "adverse event", "dose", "medication", "symptom",
];
