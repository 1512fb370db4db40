use ttt_lib::{
    structures::{column::ColumnKind, operator::Catalog},
    table::{ColumnOk, Table},
};

mod basic {

    use super::*;

    #[test]
    fn one_variable() {
        let mut table = Table::new();
        table.add_variable();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.rows(), &[vec![true], vec![false]]);
    }

    #[test]
    fn two_variables() {
        let mut table = Table::new();
        table.add_variable();
        let original = table.rows().to_vec();
        table.add_variable();

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 2);

        for row in original {
            let mut with_true = row.clone();
            with_true.push(true);
            let mut with_false = row;
            with_false.push(false);

            assert!(table.rows().contains(&with_true));
            assert!(table.rows().contains(&with_false));
        }
    }

    #[test]
    fn self_and() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();

        let and_index = catalog.find("and").ok();
        assert_eq!(and_index, Some(8));

        let result = table.add_operator_column(&catalog, Some(1), and_index, Some(1), "self-and");
        assert_eq!(result, Ok(ColumnOk::Added(3)));

        for row in table.rows() {
            assert_eq!(row[2], row[0]);
        }
    }

    #[test]
    fn no_deduplication() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();

        let first = table.add_operator_column(&catalog, Some(1), Some(6), Some(2), "x");
        let second = table.add_operator_column(&catalog, Some(1), Some(6), Some(2), "x");

        assert_eq!(first, Ok(ColumnOk::Added(3)));
        assert_eq!(second, Ok(ColumnOk::Added(4)));
        assert_eq!(table.values_of(3), table.values_of(4));
        assert_eq!(table.column(3).map(|c| c.label()), table.column(4).map(|c| c.label()));
        assert_eq!(table.column(3).map(|c| c.derivation()), table.column(4).map(|c| c.derivation()));
    }

    #[test]
    fn guard() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();
        let before = table.snapshot();

        let requests = [
            (None, Some(8), Some(2), "x"),
            (Some(1), None, Some(2), "x"),
            (Some(1), Some(8), None, "x"),
            (Some(1), Some(8), Some(2), ""),
            (None, None, None, ""),
        ];

        for (left, operator, right, name) in requests {
            assert_eq!(
                table.add_operator_column(&catalog, left, operator, right, name),
                Ok(ColumnOk::Skipped)
            );
        }

        assert_eq!(before, table.snapshot());
    }

    #[test]
    fn composition() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        let p = table.add_variable();
        let q = table.add_variable();

        let or = catalog.find("or").ok();
        let nand = catalog.find("nand").ok();
        let and = catalog.find("and").ok();

        let Ok(ColumnOk::Added(p_or_q)) = table.add_operator_column(&catalog, Some(p), or, Some(q), "p or q") else {
            panic!("Column missing");
        };
        let Ok(ColumnOk::Added(p_nand_q)) = table.add_operator_column(&catalog, Some(p), nand, Some(q), "p nand q") else {
            panic!("Column missing");
        };
        let Ok(ColumnOk::Added(xor)) = table.add_operator_column(&catalog, Some(p_or_q), and, Some(p_nand_q), "xor") else {
            panic!("Column missing");
        };

        let direct = catalog.find("xor").ok();
        let Ok(ColumnOk::Added(direct)) = table.add_operator_column(&catalog, Some(p), direct, Some(q), "direct") else {
            panic!("Column missing");
        };

        assert_eq!(table.values_of(xor), table.values_of(direct));
        assert_eq!(table.column(xor).map(|c| c.kind()), Some(ColumnKind::Operator));

        let operands = table.operands().map(|(label, position)| (label.to_string(), position)).collect::<Vec<_>>();
        assert_eq!(
            operands,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("p or q".to_string(), 3),
                ("p nand q".to_string(), 4),
                ("xor".to_string(), 5),
                ("direct".to_string(), 6),
            ]
        );
    }

    #[test]
    fn rows_match_columns() {
        let catalog = Catalog::standard();
        let mut table = Table::new();

        for round in 0..4 {
            table.add_variable();
            let columns = table.column_count();
            for operator in 0..16 {
                let left = (operator as usize + round) % columns + 1;
                let right = (operator as usize * 7) % columns + 1;
                assert!(table
                    .add_operator_column(&catalog, Some(left), Some(operator), Some(right), "op")
                    .is_ok());
            }
            assert!(table.rows().iter().all(|row| row.len() == table.column_count()));
        }

        assert_eq!(table.row_count(), 16);
        assert_eq!(table.column_count(), 4 + 4 * 16);
        assert_eq!(table.variable_count(), 4);
    }
}
