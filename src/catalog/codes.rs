//! Fetch codes accepted by the `quotes.csv` `f=` parameter.

/// Every documented fetch code with a human-readable description, ordered by code.
pub const KNOWN_CODES: &[(&str, &str)] = &[
    ("a", "Ask"),
    ("a2", "Average Daily Volume"),
    ("a5", "Ask Size"),
    ("b", "Bid"),
    ("b2", "Ask (Real-time)"),
    ("b3", "Bid (Real-time)"),
    ("b4", "Book Value"),
    ("b6", "Bid Size"),
    ("c", "Change and Percent Change"),
    ("c1", "Change"),
    ("c3", "Commission"),
    ("c6", "Change (Real-time)"),
    ("c8", "After Hours Change (Real-time)"),
    ("d", "Dividend/Share"),
    ("d1", "Last Trade Date"),
    ("d2", "Trade Date"),
    ("e", "Earnings/Share"),
    ("e1", "Error Indication (returned for symbol changed / invalid)"),
    ("e7", "EPS Est. Current Year"),
    ("e8", "EPS Est. Next Year"),
    ("e9", "EPS Est. Next Quarter"),
    ("f6", "Float Shares"),
    ("g", "Day's Low"),
    ("g1", "Holdings Gain Percent"),
    ("g3", "Annualized Gain"),
    ("g4", "Holdings Gain"),
    ("g5", "Holdings Gain Percent (Real-time)"),
    ("g6", "Holdings Gain (Real-time)"),
    ("h", "Day's High"),
    ("i", "More Info"),
    ("i5", "Order Book (Real-time)"),
    ("j", "52-week Low"),
    ("j1", "Market Capitalization"),
    ("j3", "Market Cap (Real-time)"),
    ("j4", "EBITDA"),
    ("j5", "Change from 52 Week Low"),
    ("j6", "Percent Change from 52 Week Low"),
    ("k", "52-week High"),
    ("k1", "Last Trade (Real-time) with Time"),
    ("k2", "Change Percent (Real-time)"),
    ("k3", "Last Trade Size"),
    ("k4", "Change from 52 Week High"),
    ("k5", "Percent Change from 52 Week High"),
    ("l", "Last Trade (with time)"),
    ("l1", "Last Trade (without time)"),
    ("l2", "High Limit"),
    ("l3", "Low Limit"),
    ("m", "Day's Range"),
    ("m2", "Day's Range (Real-time)"),
    ("m3", "50 Day Moving Average"),
    ("m4", "200 Day Moving Average"),
    ("m5", "Change from 200 Day Moving Average"),
    ("m6", "Percent Change from 200 Day Moving Average"),
    ("m7", "Change from 50 Day Moving Average"),
    ("m8", "Percent Change from 50 Day Moving Average"),
    ("n", "Name"),
    ("n4", "Notes"),
    ("o", "Open"),
    ("p", "Previous Close"),
    ("p1", "Price Paid"),
    ("p2", "Change in Percent"),
    ("p5", "Price/Sales"),
    ("p6", "Price/Book"),
    ("q", "Ex-Dividend Date"),
    ("r", "P/E Ratio"),
    ("r1", "Dividend Pay Date"),
    ("r2", "P/E (Real-time)"),
    ("r5", "PEG Ratio"),
    ("r6", "Price/EPS Est. Current Year"),
    ("r7", "Price/EPS Est. Next Year"),
    ("s", "Symbol"),
    ("s1", "Shares Owned"),
    ("s7", "Short Ratio"),
    ("t1", "Last Trade Time"),
    ("t6", "Trade Links"),
    ("t7", "Ticker Trend"),
    ("t8", "1 Year Target Price"),
    ("v", "Volume"),
    ("v1", "Holdings Value"),
    ("v7", "Holdings Value (Real-time)"),
    ("w", "52 Week Range"),
    ("w1", "Day's Value Change"),
    ("w4", "Day's Value Change (Real-time)"),
    ("x", "Stock Exchange"),
    ("y", "Dividend Yield"),
];

/// Looks up the description of a fetch code. Returns `None` for codes the
/// service does not document; such codes are still accepted by the catalog.
pub fn describe(code: &str) -> Option<&'static str> {
    KNOWN_CODES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| KNOWN_CODES[i].1)
}

/// True when `code` is a documented fetch code.
pub fn is_known(code: &str) -> bool {
    describe(code).is_some()
}
