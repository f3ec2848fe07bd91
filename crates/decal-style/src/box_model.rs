//! CSS box-model shorthand expansion.

/// The four edges of a padding or margin declaration, clockwise from top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSides {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl BoxSides {
    /// Expands a CSS shorthand (`padding: 4px 8px`) into per-edge values.
    ///
    /// One value applies to all edges; two are vertical/horizontal; three
    /// are top, horizontal, bottom; four are clockwise. Returns `None` for
    /// blank input. Extra values beyond four are ignored.
    pub fn parse(shorthand: &str) -> Option<BoxSides> {
        let parts: Vec<&str> = shorthand.split_whitespace().collect();
        match parts.as_slice() {
            [] => None,
            [all] => Some(BoxSides::uniform(*all)),
            [vertical, horizontal] => Some(BoxSides {
                top: vertical.to_string(),
                right: horizontal.to_string(),
                bottom: vertical.to_string(),
                left: horizontal.to_string(),
            }),
            [top, horizontal, bottom] => Some(BoxSides {
                top: top.to_string(),
                right: horizontal.to_string(),
                bottom: bottom.to_string(),
                left: horizontal.to_string(),
            }),
            [top, right, bottom, left, ..] => Some(BoxSides {
                top: top.to_string(),
                right: right.to_string(),
                bottom: bottom.to_string(),
                left: left.to_string(),
            }),
        }
    }

    /// All four edges set to the same value.
    pub fn uniform(value: impl Into<String>) -> BoxSides {
        let value = value.into();
        BoxSides {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// True when one combined attribute can stand in for all four edges.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_value_fills_all_edges() {
        let sides = BoxSides::parse("8px").unwrap();
        assert_eq!(sides, BoxSides::uniform("8px"));
        assert!(sides.is_uniform());
    }

    #[test]
    fn two_values_split_axes() {
        let sides = BoxSides::parse("4px 8px").unwrap();
        assert_eq!(sides.top, "4px");
        assert_eq!(sides.bottom, "4px");
        assert_eq!(sides.right, "8px");
        assert_eq!(sides.left, "8px");
        assert!(!sides.is_uniform());
    }

    #[test]
    fn three_values_share_horizontal() {
        let sides = BoxSides::parse("1px 2px 3px").unwrap();
        assert_eq!(
            (
                sides.top.as_str(),
                sides.right.as_str(),
                sides.bottom.as_str(),
                sides.left.as_str()
            ),
            ("1px", "2px", "3px", "2px")
        );
    }

    #[test]
    fn four_values_run_clockwise() {
        let sides = BoxSides::parse("1px 2px 3px 4px").unwrap();
        assert_eq!(sides.left, "4px");
        assert_eq!(sides.right, "2px");
    }

    #[test]
    fn blank_shorthand_is_none() {
        assert_eq!(BoxSides::parse(""), None);
        assert_eq!(BoxSides::parse("   "), None);
    }

    fn css_length() -> impl Strategy<Value = String> {
        (0u32..512).prop_map(|n| format!("{}px", n))
    }

    proptest! {
        #[test]
        fn single_value_is_always_uniform(v in css_length()) {
            let sides = BoxSides::parse(&v).unwrap();
            prop_assert!(sides.is_uniform());
            prop_assert_eq!(sides.top, v);
        }

        #[test]
        fn two_values_pair_opposite_edges(v in css_length(), h in css_length()) {
            let sides = BoxSides::parse(&format!("{} {}", v, h)).unwrap();
            prop_assert_eq!(&sides.top, &sides.bottom);
            prop_assert_eq!(&sides.right, &sides.left);
            prop_assert_eq!(sides.top, v);
            prop_assert_eq!(sides.right, h);
        }

        #[test]
        fn four_values_keep_order(
            a in css_length(),
            b in css_length(),
            c in css_length(),
            d in css_length(),
        ) {
            let sides = BoxSides::parse(&format!("{} {} {} {}", a, b, c, d)).unwrap();
            prop_assert_eq!(sides.top, a);
            prop_assert_eq!(sides.right, b);
            prop_assert_eq!(sides.bottom, c);
            prop_assert_eq!(sides.left, d);
        }
    }
}
