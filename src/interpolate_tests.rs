#[cfg(test)]
mod tests {
    use crate::error::BuildError;
    use crate::modifiers::Modifier;
    use crate::value::SqlValue;
    use crate::{sql_list, sql_map};
    use pretty_assertions::assert_eq;
    use std::error::Error;

    fn mismatch(modifier: Modifier, value: &str) -> BuildError {
        BuildError::TypeMismatch {
            modifier,
            value: value.to_string(),
        }
    }

    #[test]
    fn int_accepts() {
        let cases: Vec<(SqlValue, &str)> = vec![
            (SqlValue::Null, "NULL"),
            (true.into(), "1"),
            (false.into(), "0"),
            (42_i64.into(), "42"),
            ((-3_i32).into(), "-3"),
            (u64::MAX.into(), "18446744073709551615"),
            (7.0_f64.into(), "7"),
            ("12".into(), "12"),
            (" 5 ".into(), "5"),
            ("5.0".into(), "5"),
            ("1e3".into(), "1000"),
        ];
        for (v, expected) in cases {
            assert_eq!(Modifier::Int.encode(&v).unwrap(), expected, "{v:?}");
        }
    }

    #[test]
    fn int_rejects() {
        assert_eq!(
            Modifier::Int.encode(&SqlValue::F64(3.5)),
            Err(mismatch(Modifier::Int, "3.5"))
        );
        assert_eq!(
            Modifier::Int.encode(&"abc".into()),
            Err(mismatch(Modifier::Int, "abc"))
        );
        assert_eq!(
            Modifier::Int.encode(&"2.5".into()),
            Err(mismatch(Modifier::Int, "2.5"))
        );
        assert_eq!(
            Modifier::Int.encode(&sql_list![1]),
            Err(mismatch(Modifier::Int, "[1]"))
        );
        assert!(Modifier::Int.encode(&SqlValue::F64(f64::NAN)).is_err());
        assert!(Modifier::Int.encode(&SqlValue::F64(1e20)).is_err());
    }

    #[test]
    fn float_accepts() {
        let cases: Vec<(SqlValue, &str)> = vec![
            (SqlValue::Null, "NULL"),
            (1.5_f64.into(), "1.5"),
            (2.0_f64.into(), "2"),
            (true.into(), "1"),
            (false.into(), "0"),
            (9_i64.into(), "9"),
            (9_u32.into(), "9"),
            // 数字字符串按整数截断
            ("3.7".into(), "3"),
            ("-3.7".into(), "-3"),
            ("10".into(), "10"),
            ("1e19".into(), "9223372036854775807"),
            ("99999999999999999999".into(), "9223372036854775807"),
            ("-1e19".into(), "-9223372036854775808"),
            ("1e400".into(), "9223372036854775807"),
        ];
        for (v, expected) in cases {
            assert_eq!(Modifier::Float.encode(&v).unwrap(), expected, "{v:?}");
        }
    }

    #[test]
    fn float_rejects() {
        assert_eq!(
            Modifier::Float.encode(&"1.5x".into()),
            Err(mismatch(Modifier::Float, "1.5x"))
        );
        assert_eq!(
            Modifier::Float.encode(&sql_map! {"a" => 1.5}),
            Err(mismatch(Modifier::Float, "{a: 1.5}"))
        );
    }

    #[test]
    fn identifiers() {
        assert_eq!(Modifier::Identifier.encode(&"name".into()).unwrap(), "`name`");
        assert_eq!(
            Modifier::Identifier
                .encode(&sql_list!["id", "name", "email"])
                .unwrap(),
            "`id`, `name`, `email`"
        );
        assert_eq!(Modifier::Identifier.encode(&sql_list![]).unwrap(), "``");
    }

    #[test]
    fn identifiers_reject() {
        assert_eq!(
            Modifier::Identifier.encode(&1_i64.into()),
            Err(mismatch(Modifier::Identifier, "1"))
        );
        assert_eq!(
            Modifier::Identifier.encode(&sql_list!["id", 2]),
            Err(mismatch(Modifier::Identifier, "[id, 2]"))
        );
        assert_eq!(
            Modifier::Identifier.encode(&sql_map! {"a" => "b"}),
            Err(mismatch(Modifier::Identifier, "{a: b}"))
        );
        assert!(Modifier::Identifier.encode(&SqlValue::Null).is_err());
    }

    #[test]
    fn array_list_and_map() {
        assert_eq!(
            Modifier::Array
                .encode(&sql_list![1, "a", (), true, 2.5])
                .unwrap(),
            "1, 'a', NULL, 1, 2.5"
        );
        assert_eq!(
            Modifier::Array
                .encode(&sql_map! {"name" => "Jack", "age" => (), "admin" => false})
                .unwrap(),
            "`name` = 'Jack', `age` = NULL, `admin` = 0"
        );
        assert_eq!(Modifier::Array.encode(&sql_list![]).unwrap(), "");
        assert_eq!(Modifier::Array.encode(&sql_map! {}).unwrap(), "");
    }

    #[test]
    fn array_rejects_scalars() {
        assert_eq!(
            Modifier::Array.encode(&"a".into()),
            Err(mismatch(Modifier::Array, "a"))
        );
    }

    #[test]
    fn array_nested_element() {
        let err = Modifier::Array
            .encode(&sql_list![1, sql_list![2, 3]])
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ArrayElementTypeMismatch {
                source: Box::new(mismatch(Modifier::Base, "[2, 3]")),
            }
        );
        assert_eq!(
            err.to_string(),
            "Only scalar values supported in array for `?a` modifier."
        );
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("Unexpected variable for modifier `?` -> passed `[2, 3]`".to_string())
        );
    }

    #[test]
    fn array_map_nested_value() {
        let err = Modifier::Array
            .encode(&sql_map! {"a" => sql_list![1]})
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ArrayElementTypeMismatch {
                source: Box::new(mismatch(Modifier::Base, "[1]")),
            }
        );
    }

    #[test]
    fn base_scalars() {
        let cases: Vec<(SqlValue, &str)> = vec![
            (SqlValue::Null, "NULL"),
            (true.into(), "1"),
            (false.into(), "0"),
            (10_i64.into(), "10"),
            (0.25_f64.into(), "0.25"),
            ("O'Reilly".into(), "'O'Reilly'"),
            ("".into(), "''"),
        ];
        for (v, expected) in cases {
            assert_eq!(Modifier::Base.encode(&v).unwrap(), expected, "{v:?}");
        }
        assert_eq!(
            Modifier::Base.encode(&sql_list!["a"]),
            Err(mismatch(Modifier::Base, "[a]"))
        );
    }
}
