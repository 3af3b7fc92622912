//! Trip models

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::DATE_FORMAT;

/// Identifies a departure: date, time slot and driver.
///
/// Body of the manifest lookup and of both departure registration calls.
#[derive(Debug, Clone, Serialize)]
pub struct SaidaRequest {
    pub data: NaiveDate,
    pub horario: NaiveTime,
    pub motorista_id: i64,
}

/// Filters for `GET /viagens/listar`
#[derive(Debug, Clone, Default)]
pub struct ViagemQuery {
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub motorista_id: Option<i64>,
}

impl ViagemQuery {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(inicio) = self.data_inicio {
            params.push(("data_inicio", inicio.format(DATE_FORMAT).to_string()));
        }
        if let Some(fim) = self.data_fim {
            params.push(("data_fim", fim.format(DATE_FORMAT).to_string()));
        }
        if let Some(motorista_id) = self.motorista_id {
            params.push(("motorista_id", motorista_id.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_saida_request_wire_format() {
        let saida = SaidaRequest {
            data: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            horario: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            motorista_id: 4,
        };

        assert_eq!(
            serde_json::to_value(&saida).unwrap(),
            json!({"data": "2025-03-14", "horario": "17:00:00", "motorista_id": 4})
        );
    }

    #[test]
    fn test_viagem_query_params() {
        let query = ViagemQuery {
            data_inicio: NaiveDate::from_ymd_opt(2025, 3, 1),
            data_fim: None,
            motorista_id: Some(4),
        };

        assert_eq!(
            query.to_query_params(),
            vec![
                ("data_inicio", "2025-03-01".to_string()),
                ("motorista_id", "4".to_string())
            ]
        );
        assert!(ViagemQuery::default().to_query_params().is_empty());
    }
}
