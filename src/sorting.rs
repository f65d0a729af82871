//! 行排序与数值归一化
//!
//! 单元格显示文本（货币符号、K/M/B 后缀）先归一化为数值，再按数值排序

use std::cmp::Ordering;

use crate::models::Row;

/// 将显示文本转换为可比较的数值
///
/// 后缀检测是子串包含而非尾部匹配：文本中任意位置出现 B/M/K 都会触发倍数。
/// 无法解析时返回负无穷，使其排到一端。
pub fn parse_value(text: &str) -> f64 {
    let upper = text.to_uppercase();
    let multiplier = if upper.contains('B') {
        1_000_000_000.0
    } else if upper.contains('M') {
        1_000_000.0
    } else if upper.contains('K') {
        1_000.0
    } else {
        1.0
    };

    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match leading_number(&stripped) {
        Some(value) => value * multiplier,
        None => f64::NEG_INFINITY,
    }
}

/// 解析最长的合法前缀（与 parseFloat 一致，"1-2" 得到 1）
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    s[..end].parse().ok()
}

/// 单元格的可比较值，缺失的单元格按空文本处理
pub fn comparable_value(row: &Row, column: usize) -> f64 {
    parse_value(row.cell(column).unwrap_or("").trim())
}

/// 按列的可比较值重排行；只改变位置，不修改内容
pub fn sort_rows(rows: &mut Vec<Row>, column: usize, ascending: bool) {
    let mut keyed: Vec<(f64, Row)> = rows
        .drain(..)
        .map(|row| (comparable_value(&row, column), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        if ascending { ord } else { ord.reverse() }
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}
