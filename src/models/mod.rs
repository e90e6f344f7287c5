pub mod dates;
mod dose;
mod patient;
mod vaccine;

pub use dose::*;
pub use patient::*;
pub use vaccine::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_dose() -> Dose {
        Dose {
            id: 7,
            vaccine_id: 3,
            type_dose: "booster".into(),
            dose_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            dose_number: 2,
            application_type: "intramuscular".into(),
        }
    }

    #[test]
    fn vaccine_serializes_pacient_id_and_iso_date() {
        let vaccine = Vaccine {
            id: 3,
            patient_id: 1,
            vaccine_name: "Hepatitis B".into(),
            dose_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            dose_number: 1,
            vaccine_type: "recombinant".into(),
        };
        let json = serde_json::to_value(&vaccine).unwrap();
        assert_eq!(json["pacient_id"], 1);
        assert_eq!(json["dose_date"], "2023-05-01T00:00:00");
        assert!(json.get("patient_id").is_none());
    }

    #[test]
    fn dose_date_reads_back_from_wire_format() {
        let json = serde_json::to_string(&sample_dose()).unwrap();
        let back: Dose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_dose());
    }

    #[test]
    fn patient_detail_flattens_patient_fields() {
        let detail = PatientDetail {
            patient: Patient {
                id: 1,
                name: "Ana".into(),
                last_name: "Souza".into(),
            },
            vaccines: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["last_name"], "Souza");
        assert_eq!(json["vaccines"], serde_json::json!([]));
    }
}
