//! Tag vocabularies shared by the CoNLL family of corpora.
//!
//! Each vocabulary's order defines the class ids of the matching label column.

/// Spanish part-of-speech tags. Used by: conll2002 (es)
pub static CONLL_2002_ES_POS_TAGS: &[&str; 60] = &[
    "AO", "AQ", "CC", "CS", "DA", "DE", "DD", "DI",
    "DN", "DP", "DT", "Faa", "Fat", "Fc", "Fd", "Fe",
    "Fg", "Fh", "Fia", "Fit", "Fp", "Fpa", "Fpt", "Fs",
    "Ft", "Fx", "Fz", "I", "NC", "NP", "P0", "PD",
    "PI", "PN", "PP", "PR", "PT", "PX", "RG", "RN",
    "SP", "VAI", "VAM", "VAN", "VAP", "VAS", "VMG", "VMI",
    "VMM", "VMN", "VMP", "VMS", "VSG", "VSI", "VSM", "VSN",
    "VSP", "VSS", "Y", "Z",
];

/// Dutch part-of-speech tags. Used by: conll2002 (nl)
pub static CONLL_2002_NL_POS_TAGS: &[&str; 12] = &[
    "Adj", "Adv", "Art", "Conj", "Int", "Misc",
    "N", "Num", "Prep", "Pron", "Punc", "V",
];

/// Penn Treebank part-of-speech tags. Used by: conll2003
pub static CONLL_2003_POS_TAGS: &[&str; 47] = &[
    "\"", "''", "#", "$", "(", ")", ",", ".",
    ":", "``", "CC", "CD", "DT", "EX", "FW", "IN",
    "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNP", "NNPS",
    "NNS", "NN|SYM", "PDT", "POS", "PRP", "PRP$", "RB", "RBR",
    "RBS", "RP", "SYM", "TO", "UH", "VB", "VBD", "VBG",
    "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB",
];

/// Phrase chunk tags (BIO). Used by: conll2003
pub static CHUNK_TAGS: &[&str; 23] = &[
    "O", "B-ADJP", "I-ADJP", "B-ADVP", "I-ADVP",
    "B-CONJP", "I-CONJP", "B-INTJ", "I-INTJ", "B-LST",
    "I-LST", "B-NP", "I-NP", "B-PP", "I-PP",
    "B-PRT", "I-PRT", "B-SBAR", "I-SBAR", "B-UCP",
    "I-UCP", "B-VP", "I-VP",
];

/// Named entity tags (BIO). Used by: conll2002, conll2003
pub static NER_TAGS: &[&str; 9] = &[
    "O", "B-PER", "I-PER", "B-ORG", "I-ORG",
    "B-LOC", "I-LOC", "B-MISC", "I-MISC",
];

/// The column separator of the conll2002 and conll2003 files
pub const CONLL_2002_SEPARATOR: char = ' ';
