//! Catalog strings shared by the integration tests, grouped by shape.
#![allow(dead_code)]

use year_range::{FixedClock, YearParser};

/// Every integration test runs as if today were 2020-06-15.
pub fn parser() -> YearParser<FixedClock> {
    YearParser::new(FixedClock::from_ymd(2020, 6, 15).unwrap())
}

/// Strings with no recognizable year.
pub const UNPARSEABLE: &[&str] = &[
    "",
    "[]",
    "?",
    "uuuu",
    "Aug",
    "publiée le 26 germinal an VI",
    "l'an IVe",
    "Feb",
    "L'AN 2 DE LA // LIBERTÉ",
    "Paris",
    "publié en frimaire l'an 3.e de la République française",
    "an 6",
    "an sept",
    "s.n.]",
    "M. D. LXI",
    "[An 4]",
    "[s.d.]",
    "Undated",
    "1uuu",
];

/// Impossible calendar dates that still carry a usable year.
pub const INVALID_BUT_CAN_GET_YEAR: &[(&str, i32)] = &[
    ("1966-14-14", 1966),
    (r"1966\4\11", 1966),
    ("2/31/1950", 1950),
    ("1869-00-00", 1869),
    ("1862-01-00", 1862),
    ("1985-05-00", 1985),
];

pub const SINGLE_YEAR: &[(&str, i32)] = &[
    ("0700", 700),
    ("0999", 999),
    ("1000", 1000),
    ("1798", 1798),
    ("1583.", 1583),
    ("1885-", 1885),
    ("1644.]", 1644),
    ("1644]", 1644),
    ("1584].", 1584),
    ("1729?]", 1729),
    ("1500 CE", 1500),
    ("1877?", 1877),
    ("1797 goda", 1797),
    ("1616: Con licenza de'svperiori", 1616),
    ("[1789]", 1789),
    ("[1968?-", 1968),
    ("[1860?]", 1860),
    ("[1789 ?]", 1789),
    ("[[1790]]", 1790),
    ("[1579].", 1579),
    ("[Ca 1790]", 1790),
    ("[c1926]", 1926),
    ("[ca 1790]", 1790),
    ("[ca. 1790]", 1790),
    ("[ca. 1850?]", 1850),
    ("[ca.1600]", 1600),
    ("[after 1726]", 1726),
    ("[an II, i.e. 1794]", 1794),
    ("[approximately 1600]", 1600),
    ("[approximately 1558].", 1558),
    ("[approximately 1717?]", 1717),
    ("[not after 1652]", 1652),
    ("[not before 1543].", 1543),
    ("A' 1640", 1640),
    ("A1566", 1566),
    ("Ans. 1656", 1656),
    ("Antonio Laffreri 1570", 1570),
    ("An 6. 1798", 1798),
    ("An 6 1798", 1798),
    ("a. 1652", 1652),
    ("ad decennium 1592", 1592),
    ("after 1622", 1622),
    ("an 10 (1802)", 1802),
    ("an 14, 1805", 1805),
    ("anno 1801", 1801),
    ("anno 1603.", 1603),
    ("approximately 1580.", 1580),
    ("approximately 1700?", 1700),
    ("approximately 1544]", 1544),
    ("anno 1599 (v. 1).", 1599),
    ("anno MDCXXXV [1635].", 1635),
    ("anno dom. 1600 (v. 3).", 1600),
    ("anno j65i [1651]", 1651),
    ("Ca. 1580 CE", 1580),
    ("c1887", 1887),
    ("ca 1796]", 1796),
    ("ca. 1558", 1558),
    ("ca. 1560?]", 1560),
    ("ca. 1700]", 1700),
    ("circa 1860", 1860),
    ("copyright 1855", 1855),
    ("en 1788", 1788),
    ("im jahr 1681", 1681),
    ("l'an 1.er de la Rep. 1792", 1792),
    ("l'anno1570", 1570),
    ("MDLXXXVIII [1588]]", 1588),
    ("MDLXI [1561]", 1561),
    ("MDCCLII. [1752-", 1752),
    ("No. 15 1792", 1792),
    ("s.a. [1712]", 1712),
    ("publié le 24 floréal [1796]", 1796),
    ("Fructidor l'an 3.e [i.e. 1795]", 1795),
];

pub const SPECIFIC_MONTH: &[(&str, i32)] = &[
    ("1975-05", 1975),
    ("1996 Jun", 1996),
    ("February 1798", 1798),
    ("March, 1794", 1794),
    ("[ ?] 10 1793", 1793),
    ("agosto 1799", 1799),
    ("Jan.y. thes.et 1798", 1798),
    ("[[décembre 1783]]", 1783),
    ("im Mai 1793", 1793),
    ("in Febr. 1795", 1795),
    ("juin année 1797", 1797),
];

pub const SPECIFIC_DAY: &[(&str, i32)] = &[
    ("1/1/1961", 1961),
    ("10/1/1987", 1987),
    ("5-1-1959", 1959),
    ("1/30/1979", 1979),
    ("10/20/1976", 1976),
    ("5-18-2014", 2014),
    ("1888-02-18", 1888),
    ("1966-2-5", 1966),
    ("1980-23-02", 1980),
    ("1792 20 Dec", 1792),
    ("1 July 1799", 1799),
    ("1 Feb. 1782", 1782),
    ("15 Jan.y 1797", 1797),
    ("12.th May 1794", 1794),
    ("12th Dec.r 1794", 1794),
    ("18 Febr. 1790", 1790),
    ("1793 March 1st", 1793),
    ("1892, Jan. 1", 1892),
    ("1997 Sep 6", 1997),
    ("Boston, November 25, 1851", 1851),
    ("d. 16 Feb. 1793", 1793),
    ("published the 30 of June 1799", 1799),
    ("Pub.d Nov.r 1st 1798", 1798),
    ("Published July 5th, 1784", 1784),
    ("April 01 1797", 1797),
    ("April 16, 1632", 1632),
    ("[April 1 1795]", 1795),
    ("Aug. 3rd, 1886", 1886),
    ("Augt. 29, 1804", 1804),
    ("Decb.r 1, 1789", 1789),
    ("Feb. 25, 1744]", 1744),
    ("[Feb.y 18 1793]", 1793),
    ("Jan.y 12st 1793", 1793),
    ("July 13, 1787", 1787),
    ("June1st.1805", 1805),
    ("May 21st 1798", 1798),
    ("March 1.t 1797", 1797),
    ("Novembr 22nd 1794", 1794),
    ("Oct.er 1st 1786", 1786),
    ("Sep.tr 15.th 1796", 1796),
    ("le 22 juin 1794", 1794),
    ("mis au jour le 26 juillet 1791", 1791),
    ("Dec. 10 & 11, 1855", 1855),
    ("January 22th [1800]", 1800),
    ("N[ovember] 21st 1786", 1786),
    ("Oct. the 2.d 1793", 1793),
];

/// `m/d/yy` dates, read against 2020-06-15.
pub const SPECIFIC_DAY_2_DIGIT_YEAR: &[(&str, i32)] = &[
    ("1/2/79", 1979),
    ("2/12/15", 2015),
    ("6/11/99", 1999),
    ("10/1/90", 1990),
    ("10/21/08", 2008),
    ("5-1-59", 1959),
    ("5-1-21", 1921),
    ("5-1-14", 2014),
];

pub const BC_DATES: &[(&str, i32)] = &[
    ("801 B.C.", -801),
    ("800 B.C.", -800),
    ("750 B.C.", -750),
    ("700 B.C.", -700),
    ("699 B.C.", -699),
    ("75 B.C.", -75),
    ("8 B.C.", -8),
    ("1666 B.C.", -1666),
];

/// Roman coin style numerals.
pub const EARLY_NUMERIC: &[(&str, i32)] = &[
    ("-999", -999),
    ("-914", -914),
    ("-18", -18),
    ("-1", -1),
    ("0", 0),
    ("5", 5),
    ("33", 33),
    ("945", 945),
];

/// Non-ASCII numerals next to a Western year: only the ASCII digits count.
pub const NON_ASCII_NUMERALS: &[(&str, i32)] = &[
    ("\u{6f1}\u{6f3}\u{6f2}\u{6f0} [1941]", 1941),
    ("\u{661}\u{662}\u{663}\u{664}-1850", 1850),
    ("\u{967}\u{96F}\u{966}\u{966} 1900", 1900),
];

pub const BRACKETS_IN_YEAR: &[(&str, i32)] = &[("169[5]", 1695), ("October 3, [18]91", 1891)];

pub const CENTURY_ONLY: &[&str] = &[
    "18th century CE",
    "17uu",
    "17--",
    "17--?]",
    "17--]",
    "[17--]",
    "[17--?]",
];

pub const BAD_DATES: &[&str] = &["9999", "2035", "0000-00-00", "uuuu", "1uuu"];

/// Every table where earliest and latest agree.
pub fn single_valued() -> impl Iterator<Item = (&'static str, i32)> {
    [
        SINGLE_YEAR,
        SPECIFIC_MONTH,
        SPECIFIC_DAY,
        SPECIFIC_DAY_2_DIGIT_YEAR,
        BC_DATES,
        BRACKETS_IN_YEAR,
        INVALID_BUT_CAN_GET_YEAR,
        EARLY_NUMERIC,
        NON_ASCII_NUMERALS,
    ]
    .into_iter()
    .flatten()
    .copied()
}
