//! Wrappers embedded in records: serde-derived structs and rows of driver values.

#[cfg(test)]
mod tests {
    use nnz::{
        DecodeError, Error, Value, Values,
        types::{Bool, Float64, Int, Int64, Str, Time, time::ZERO},
    };
    use serde::{Deserialize, Serialize};
    use time::macros::datetime;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Account {
        id: Int64,
        name: Str,
        email: Str,
        active: Bool,
        logins: Int,
        balance: Float64,
        closed_at: Time,
    }

    fn sample() -> Account {
        Account {
            id: Int64(7),
            name: Str::from("ada"),
            email: Str::default(),
            active: Bool(true),
            logins: Int(0),
            balance: Float64(12.5),
            closed_at: Time(ZERO),
        }
    }

    #[test]
    fn record_serializes_zero_fields_as_null() -> anyhow::Result<()> {
        let json = serde_json::to_value(sample())?;
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "ada",
                "email": null,
                "active": true,
                "logins": null,
                "balance": 12.5,
                "closed_at": null,
            })
        );
        Ok(())
    }

    #[test]
    fn record_deserializes_nulls_as_zero() -> anyhow::Result<()> {
        let account: Account = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "ada",
                "email": null,
                "active": true,
                "logins": null,
                "balance": 12.5,
                "closed_at": null
            }"#,
        )?;
        assert_eq!(account, sample());
        Ok(())
    }

    #[test]
    fn record_field_mismatch_fails_the_whole_record() {
        let err = serde_json::from_str::<Account>(
            r#"{"id": "7", "name": null, "email": null, "active": null,
                "logins": null, "balance": null, "closed_at": null}"#,
        )
        .unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("nnz::Int64"));
    }

    #[test]
    fn row_of_driver_values() -> anyhow::Result<()> {
        let closed = datetime!(2024-02-29 12:00 -05:00);
        let row: Values = [
            ("id", Value::Integer(7)),
            ("name", Value::Blob(b"ada".to_vec())),
            ("email", Value::Null),
            ("active", Value::Bool(true)),
            ("logins", Value::Null),
            ("balance", Value::Double(12.5)),
            ("closed_at", Value::Timestamp(closed)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let account = Account {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            active: row.get("active")?,
            logins: row.get("logins")?,
            balance: row.get("balance")?,
            closed_at: row.get_idx(6)?,
        };
        assert_eq!(
            account,
            Account {
                closed_at: Time(closed),
                ..sample()
            }
        );
        Ok(())
    }

    #[test]
    fn record_into_row_and_back() -> anyhow::Result<()> {
        let a = sample();
        let row = Values::new()
            .val("id", a.id)
            .val("name", &a.name)
            .val("email", &a.email)
            .val("active", &a.active)
            .val("logins", a.logins)
            .val("balance", a.balance)
            .val("closed_at", a.closed_at);

        assert_eq!(
            row.values().filter(|v| v.is_null()).count(),
            3,
            "email, logins and closed_at are zero"
        );
        assert_eq!(row.get::<Str>("name")?, a.name);
        assert_eq!(row.get::<Time>("closed_at")?, Time(ZERO));
        Ok(())
    }

    #[test]
    fn row_decode_errors_name_the_column() {
        let row = Values::new().val("logins", Str::from("many"));
        match row.get::<Int>("logins").unwrap_err() {
            Error::ColumnDecode { index, source } => {
                assert_eq!(index, "\"logins\"");
                assert!(matches!(source, DecodeError::DataType { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
