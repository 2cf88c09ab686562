use chrono::NaiveDate;
use regex::Regex;
use sqlow::prelude::*;

#[test]
fn numerals_parse_back_unquoted() {
    let ints: Vec<i64> = vec![0, 1, -1, 42, i64::MIN, i64::MAX];
    for n in ints {
        for style in [LiteralStyle::Backtick, LiteralStyle::SingleQuote] {
            let out = format_scalar(&n.into(), style);
            assert_eq!(out.parse::<i64>().unwrap(), n, "{out}");
        }
    }

    let out = format_scalar(&u64::MAX.into(), LiteralStyle::Backtick);
    assert_eq!(out.parse::<u64>().unwrap(), u64::MAX);

    for f in [0.5_f64, -3.25, 1e-7, 123_456.789] {
        let out = format_scalar(&f.into(), LiteralStyle::SingleQuote);
        assert!(!out.contains(['\'', '`']));
        assert_eq!(out.parse::<f64>().unwrap(), f);
    }
}

#[test]
fn escaped_text_has_no_bare_dangerous_characters() -> Result<(), Box<dyn std::error::Error>> {
    let bare_quote_or_wildcard = Regex::new(r#"(^|[^\\])['"%_]"#)?;
    let inputs = [
        "O'Brien",
        "say \"hi\"",
        "100% off_sale",
        "tab\there\nnew\rline\u{8}",
        r"C:\temp\0\Z",
        "''%%__",
    ];

    for input in inputs {
        let out = escape(input);
        assert!(!bare_quote_or_wildcard.is_match(&out), "{input:?} -> {out:?}");
        assert!(!out.contains(['\n', '\r', '\t', '\u{8}']), "{out:?}");
    }
    Ok(())
}

#[test]
fn escaping_is_not_idempotent() {
    let once = escape("%").into_owned();
    assert_eq!(once, r"\%");
    // the second pass doubles the backslash, then re-escapes the wildcard
    assert_eq!(escape(&once), r"\\\%");
}

#[test]
fn sequence_rules_see_doubled_backslashes() {
    assert_eq!(escape(r"\0"), r"\\\0");
    assert_eq!(escape(r"\Z"), r"\\\Z");
    assert_eq!(escape(r"a\0b\Zc"), r"a\\\0b\\\Zc");
}

#[test]
fn list_of_number_and_text() {
    assert_eq!(
        format_list(&sql_values![1, "a"], LiteralStyle::SingleQuote),
        "1,'a'"
    );
    assert_eq!(
        format_list(&sql_values![1, "a_%"], LiteralStyle::SingleQuote),
        r"1,'a\_\%'"
    );
    assert_eq!(
        format_list(&sql_values![2.5, "it's", 7_u8], LiteralStyle::Backtick),
        r"2.5,`it\\'s`,7"
    );
}

#[test]
fn date_helpers_do_not_pad() {
    let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(8, 4, 9)
        .unwrap();
    assert_eq!(format_date(&ts), "2024-3-7");
    assert_eq!(format_time(&ts), "8:4:9");
    assert_eq!(format_datetime(&ts), "2024-3-7 8:4:9");
    // the scalar formatter keeps its own zero-padded time pattern
    assert_eq!(
        format_scalar(&ts.into(), LiteralStyle::SingleQuote),
        "'2024/3/7 08:04:09'"
    );
}

#[test]
fn built_statement_reads_naturally() {
    let ts = NaiveDate::from_ymd_opt(2023, 12, 31)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();
    let sql = format!(
        "UPDATE jobs SET note = {}, run_at = {} WHERE id IN ({})",
        format_scalar(&"50% done".into(), LiteralStyle::SingleQuote),
        format_scalar(&ts.into(), LiteralStyle::SingleQuote),
        format_list(&sql_values![4, 8, 15], LiteralStyle::SingleQuote),
    );
    assert_eq!(
        sql,
        r"UPDATE jobs SET note = '50\% done', run_at = '2023/12/31 23:00:00' WHERE id IN (4,8,15)"
    );
}
