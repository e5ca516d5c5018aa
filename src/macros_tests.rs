#[cfg(test)]
mod tests {
    use crate::modifiers::{Arg, skip};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn args_macro_mixed_types() {
        let a = crate::args![1, "name", 2.5, (), skip(), crate::sql_list!["x"]];
        assert_eq!(
            a,
            vec![
                Arg::Value(SqlValue::I64(1)),
                Arg::Value(SqlValue::from("name")),
                Arg::Value(SqlValue::F64(2.5)),
                Arg::Value(SqlValue::Null),
                Arg::from(skip()),
                Arg::Value(SqlValue::List(vec![SqlValue::from("x")])),
            ]
        );
        assert!(crate::args![].is_empty());
    }

    #[test]
    fn sql_map_macro_keeps_order() {
        let m = crate::sql_map! {"z" => 1, "a" => "b"};
        assert_eq!(
            m,
            SqlValue::Map(vec![
                ("z".to_string(), SqlValue::I64(1)),
                ("a".to_string(), SqlValue::from("b")),
            ])
        );
    }
}
