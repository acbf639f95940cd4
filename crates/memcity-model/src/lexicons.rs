//! Single source of truth for lexicon data shared by more than one
//! `memcity-*` crate (spec §4.1). `memcity-config` re-exports this list as
//! its public default; `memcity-extract` builds its built-in stoplist from
//! it directly. Keeping exactly one copy is the point: two independently
//! hardcoded lists drift apart as entries get added to one and not the
//! other.

/// ~100 short uppercase English words and abbreviations that must never be
/// classified as tickers regardless of context (spec §4.1).
pub const DEFAULT_TICKER_STOPLIST: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "OUT", "DAY", "GET", "HAS", "HIM", "HIS", "HOW", "ITS", "NEW", "NOW", "OLD", "SEE", "TWO",
    "WAY", "WHO", "BOY", "DID", "MAN", "MEN", "PUT", "SAY", "SHE", "TOO", "USE", "AM", "AN", "AS",
    "AT", "BE", "BY", "DO", "GO", "HE", "IF", "IN", "IS", "IT", "ME", "MY", "NO", "OF", "ON", "OR",
    "SO", "TO", "UP", "US", "WE", "OK", "ID", "UK", "EU", "AI", "PR", "QA", "HR", "PM", "VS", "ETC",
    "ASAP", "FYI", "TBD", "AKA", "CEO", "CFO", "CTO", "COO", "FROM", "THIS", "THAT", "THEY", "THEM",
    "THEN", "THAN", "WHEN", "WHAT", "WERE", "BEEN", "HAVE", "WOULD", "COULD", "SHOULD", "ABOUT",
    "THERE", "THEIR", "WHICH", "INTO", "OVER", "SOME", "LIKE", "JUST", "MORE", "MOST", "SUCH",
    "ONLY", "VERY", "EACH", "BOTH", "ALSO", "DOES", "DONE", "GOES", "MADE", "MAKE", "MANY", "MUCH",
    "MUST", "SAME", "WELL",
];
