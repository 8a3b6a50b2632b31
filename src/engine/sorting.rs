// ==========================================
// 工作计划报表生成 - 订单号自然排序
// ==========================================
// 职责: 订单列表的编号感知排序
// 规则: 连续数字段按数值比较,非数字段按字典序比较,
//       因此 "ORD-2" < "ORD-10"（纯字典序会得到相反结果）
// ==========================================

use crate::domain::work_plan::Order;
use std::cmp::Ordering;

/// 编号感知的自然比较
///
/// 将两个字符串切分为数字段与非数字段交替的序列逐段比较。
/// 数字段数值相等但前导零数量不同时,零少者在前（保持全序）
pub fn natural_number_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    let ord = compare_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

/// 按订单号自然序返回订单引用
pub fn sorted_by_number(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| natural_number_cmp(&a.number, &b.number));
    sorted
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if c.is_ascii_digit() {
            run.push(c);
            chars.next();
        } else {
            break;
        }
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');

    // 有效位数多者数值更大;位数相同按字典序即数值序
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(natural_number_cmp("ORD-2", "ORD-10"), Ordering::Less);
        assert_eq!(natural_number_cmp("ORD-10", "ORD-2"), Ordering::Greater);
        assert_eq!(natural_number_cmp("ORD-1", "ORD-2"), Ordering::Less);
    }

    #[test]
    fn test_plain_lexicographic_for_non_digits() {
        assert_eq!(natural_number_cmp("ABC", "ABD"), Ordering::Less);
        assert_eq!(natural_number_cmp("A", "AB"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_keep_total_order() {
        assert_eq!(natural_number_cmp("ORD-007", "ORD-7"), Ordering::Greater);
        assert_eq!(natural_number_cmp("ORD-007", "ORD-007"), Ordering::Equal);
        assert_eq!(natural_number_cmp("ORD-007", "ORD-8"), Ordering::Less);
    }

    #[test]
    fn test_mixed_segments() {
        assert_eq!(natural_number_cmp("A2B10", "A2B9"), Ordering::Greater);
        assert_eq!(natural_number_cmp("A2B", "A10A"), Ordering::Less);
    }
}
