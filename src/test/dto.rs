#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::api::dto::TimeSalesDto;

    #[test]
    fn parses_the_series_envelope() {
        let body = r#"
        {
            "series": {
                "data": [
                    {
                        "time": "2023-04-03T09:35:00",
                        "open": 171.56,
                        "high": 171.92,
                        "low": 171.3,
                        "close": 171.81,
                        "volume": 4500
                    },
                    {
                        "time": "2023-04-03T09:40:00",
                        "open": 171.81,
                        "high": 172.04,
                        "low": 171.75,
                        "close": 171.99,
                        "volume": 3200
                    }
                ]
            }
        }
        "#;

        let quotes = serde_json::from_str::<TimeSalesDto>(body)
            .unwrap()
            .into_quotes();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].time(), "2023-04-03T09:35:00");
        assert_eq!(*quotes[0].open(), dec!(171.56));
        assert_eq!(*quotes[0].low(), dec!(171.3));
        assert_eq!(*quotes[1].volume(), 3200);
    }

    #[test]
    fn rejects_a_body_without_series() {
        let body = r#"{"error": "invalid token"}"#;

        assert!(serde_json::from_str::<TimeSalesDto>(body).is_err());
    }
}
