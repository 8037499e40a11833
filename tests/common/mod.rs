#![allow(dead_code)]

/// One regression expression with its reference implementation.
pub struct Case {
    pub expr: &'static str,
    pub truth: fn(u32) -> u32,
    /// Mixes `&&` and `||` without parentheses and relies on `&&` binding
    /// tighter. Holds `(n, uniform_result)` for a count where the uniform
    /// tier disagrees with the reference.
    pub divergent: Option<(u32, u32)>,
}

fn b(v: bool) -> u32 {
    v as u32
}

pub fn corpus() -> Vec<Case> {
    vec![
        Case {
            expr: "0",
            truth: |_| 0,
            divergent: None,
        },
        Case {
            expr: "(n == 0) ? 0 : ((n == 1) ? 1 : 2)",
            truth: |n| match n {
                0 => 0,
                1 => 1,
                _ => 2,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 0) ? 0 : ((n == 1) ? 1 : (((n % 100 == 2 || n % 100 == 22 || n % 100 == 42 || n % 100 == 62 || n % 100 == 82) || n % 1000 == 0 && (n % 100000 >= 1000 && n % 100000 <= 20000 || n % 100000 == 40000 || n % 100000 == 60000 || n % 100000 == 80000) || n != 0 && n % 1000000 == 100000) ? 2 : ((n % 100 == 3 || n % 100 == 23 || n % 100 == 43 || n % 100 == 63 || n % 100 == 83) ? 3 : ((n != 1 && (n % 100 == 1 || n % 100 == 21 || n % 100 == 41 || n % 100 == 61 || n % 100 == 81)) ? 4 : 5))))",
            truth: |n| {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if (n % 100 == 2
                    || n % 100 == 22
                    || n % 100 == 42
                    || n % 100 == 62
                    || n % 100 == 82)
                    || n % 1000 == 0
                        && (n % 100000 >= 1000 && n % 100000 <= 20000
                            || n % 100000 == 40000
                            || n % 100000 == 60000
                            || n % 100000 == 80000)
                    || n != 0 && n % 1000000 == 100000
                {
                    2
                } else if n % 100 == 3
                    || n % 100 == 23
                    || n % 100 == 43
                    || n % 100 == 63
                    || n % 100 == 83
                {
                    3
                } else if n != 1
                    && (n % 100 == 1
                        || n % 100 == 21
                        || n % 100 == 41
                        || n % 100 == 61
                        || n % 100 == 81)
                {
                    4
                } else {
                    5
                }
            },
            divergent: Some((2, 5)),
        },
        Case {
            expr: "(n == 0) ? 0 : ((n == 1) ? 1 : ((n == 2) ? 2 : ((n % 100 >= 3 && n % 100 <= 10) ? 3 : ((n % 100 >= 11 && n % 100 <= 99) ? 4 : 5))))",
            truth: |n| match (n, n % 100) {
                (0, _) => 0,
                (1, _) => 1,
                (2, _) => 2,
                (_, 3..=10) => 3,
                (_, 11..=99) => 4,
                _ => 5,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 0) ? 0 : ((n == 1) ? 1 : ((n == 2) ? 2 : ((n == 3) ? 3 : ((n == 6) ? 4 : 5))))",
            truth: |n| match n {
                0..=3 => n,
                6 => 4,
                _ => 5,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 0 || n == 1) ? 0 : ((n >= 2 && n <= 10) ? 1 : 2)",
            truth: |n| match n {
                0 | 1 => 0,
                2..=10 => 1,
                _ => 2,
            },
            divergent: None,
        },
        Case {
            expr: "n != 1",
            truth: |n| b(n != 1),
            divergent: None,
        },
        Case {
            expr: "n > 1",
            truth: |n| b(n > 1),
            divergent: None,
        },
        Case {
            expr: "(n % 100 == 1) ? 0 : ((n % 100 == 2) ? 1 : ((n % 100 == 3 || n % 100 == 4) ? 2 : 3))",
            truth: |n| match n % 100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            divergent: None,
        },
        Case {
            expr: "(n % 10 == 0 || n % 100 >= 11 && n % 100 <= 19) ? 0 : ((n % 10 == 1 && n % 100 != 11) ? 1 : 2)",
            truth: |n| {
                if n % 10 == 0 || n % 100 >= 11 && n % 100 <= 19 {
                    0
                } else if n % 10 == 1 && n % 100 != 11 {
                    1
                } else {
                    2
                }
            },
            divergent: Some((20, 2)),
        },
        Case {
            expr: "(n % 10 == 1) ? 0 : ((n % 10 == 2) ? 1 : ((n % 100 == 0 || n % 100 == 20 || n % 100 == 40 || n % 100 == 60 || n % 100 == 80) ? 2 : 3))",
            truth: |n| match (n % 10, n % 100) {
                (1, _) => 0,
                (2, _) => 1,
                (_, 0 | 20 | 40 | 60 | 80) => 2,
                _ => 3,
            },
            divergent: None,
        },
        Case {
            expr: "n % 10 != 1 || n % 100 == 11",
            truth: |n| b(n % 10 != 1 || n % 100 == 11),
            divergent: None,
        },
        Case {
            expr: "(n % 10 == 1 && n % 100 != 11) ? 0 : ((n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14)) ? 1 : 2)",
            truth: |n| {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14) {
                    1
                } else {
                    2
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n % 10 == 1 && (n % 100 < 11 || n % 100 > 19)) ? 0 : ((n % 10 >= 2 && n % 10 <= 9 && (n % 100 < 11 || n % 100 > 19)) ? 1 : 2)",
            truth: |n| {
                let outside_teens = n % 100 < 11 || n % 100 > 19;
                if n % 10 == 1 && outside_teens {
                    0
                } else if n % 10 >= 2 && n % 10 <= 9 && outside_teens {
                    1
                } else {
                    2
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n % 10 == 1 && n % 100 != 11 && n % 100 != 71 && n % 100 != 91) ? 0 : ((n % 10 == 2 && n % 100 != 12 && n % 100 != 72 && n % 100 != 92) ? 1 : ((((n % 10 == 3 || n % 10 == 4) || n % 10 == 9) && (n % 100 < 10 || n % 100 > 19) && (n % 100 < 70 || n % 100 > 79) && (n % 100 < 90 || n % 100 > 99)) ? 2 : ((n != 0 && n % 1000000 == 0) ? 3 : 4)))",
            truth: |n| {
                if n % 10 == 1 && n % 100 != 11 && n % 100 != 71 && n % 100 != 91 {
                    0
                } else if n % 10 == 2 && n % 100 != 12 && n % 100 != 72 && n % 100 != 92 {
                    1
                } else if ((n % 10 == 3 || n % 10 == 4) || n % 10 == 9)
                    && (n % 100 < 10 || n % 100 > 19)
                    && (n % 100 < 70 || n % 100 > 79)
                    && (n % 100 < 90 || n % 100 > 99)
                {
                    2
                } else if n != 0 && n % 1000000 == 0 {
                    3
                } else {
                    4
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n == 0 || n % 100 >= 2 && n % 100 <= 10) ? 1 : ((n % 100 >= 11 && n % 100 <= 19) ? 2 : 3))",
            truth: |n| {
                if n == 1 {
                    0
                } else if n == 0 || n % 100 >= 2 && n % 100 <= 10 {
                    1
                } else if n % 100 >= 11 && n % 100 <= 19 {
                    2
                } else {
                    3
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n == 0 || n % 100 >= 2 && n % 100 <= 19) ? 1 : 2)",
            truth: |n| {
                if n == 1 {
                    0
                } else if n == 0 || n % 100 >= 2 && n % 100 <= 19 {
                    1
                } else {
                    2
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14)) ? 1 : 2)",
            truth: |n| {
                if n == 1 {
                    0
                } else if n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14) {
                    1
                } else {
                    2
                }
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n == 2) ? 1 : 2)",
            truth: |n| match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n == 2) ? 1 : ((n > 10 && n % 10 == 0) ? 2 : 3))",
            truth: |n| match n {
                1 => 0,
                2 => 1,
                _ if n > 10 && n % 10 == 0 => 2,
                _ => 3,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n == 2) ? 1 : ((n >= 3 && n <= 6) ? 2 : ((n >= 7 && n <= 10) ? 3 : 4)))",
            truth: |n| match n {
                1 => 0,
                2 => 1,
                3..=6 => 2,
                7..=10 => 3,
                _ => 4,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1) ? 0 : ((n >= 2 && n <= 4) ? 1 : 2)",
            truth: |n| match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            divergent: None,
        },
        Case {
            expr: "(n == 1 || n == 11) ? 0 : ((n == 2 || n == 12) ? 1 : ((n >= 3 && n <= 10 || n >= 13 && n <= 19) ? 2 : 3))",
            truth: |n| match n {
                1 | 11 => 0,
                2 | 12 => 1,
                3..=10 | 13..=19 => 2,
                _ => 3,
            },
            divergent: None,
        },
        Case {
            expr: "n != 1 && n != 2 && n != 3 && (n % 10 == 4 || n % 10 == 6 || n % 10 == 9)",
            truth: |n| b(n != 1 && n != 2 && n != 3 && (n % 10 == 4 || n % 10 == 6 || n % 10 == 9)),
            divergent: None,
        },
        Case {
            expr: "n >= 2 && (n < 11 || n > 99)",
            truth: |n| b(n >= 2 && (n < 11 || n > 99)),
            divergent: None,
        },
    ]
}
