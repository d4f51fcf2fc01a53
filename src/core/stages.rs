use crate::core::fetch::fetch_body;
use crate::domain::model::{Coordinates, Endpoints, IpAddress, PassTime};
use crate::domain::ports::HttpFetcher;
use crate::utils::error::{IssError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

pub const IP_RESOURCE: &str = "IP";
pub const COORDINATES_RESOURCE: &str = "coordinates";
pub const PASS_TIMES_RESOURCE: &str = "pass times";

#[derive(Debug, Deserialize)]
struct IpReply {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct GeoReply {
    data: Coordinates,
}

#[derive(Debug, Deserialize)]
struct PassTimesReply {
    response: Vec<PassTime>,
}

fn decode<T: DeserializeOwned>(resource: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| IssError::parse(resource, e.to_string()))
}

fn parse_endpoint(field: &str, endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| IssError::InvalidConfigValueError {
        field: field.to_string(),
        value: endpoint.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

/// Geolocation URL with the IP appended as the last path segment.
pub fn coords_url(geo_endpoint: &str, ip: &str) -> Result<Url> {
    let mut url = parse_endpoint("endpoints.geo", geo_endpoint)?;
    url.path_segments_mut()
        .map_err(|_| IssError::InvalidConfigValueError {
            field: "endpoints.geo".to_string(),
            value: geo_endpoint.to_string(),
            reason: "URL cannot take a path".to_string(),
        })?
        .pop_if_empty()
        .push(ip);
    Ok(url)
}

pub fn pass_times_url(pass_times_endpoint: &str, coords: Coordinates) -> Result<Url> {
    let mut url = parse_endpoint("endpoints.pass_times", pass_times_endpoint)?;
    url.query_pairs_mut()
        .append_pair("lat", &coords.latitude.to_string())
        .append_pair("lon", &coords.longitude.to_string());
    Ok(url)
}

pub async fn fetch_my_ip(fetcher: &dyn HttpFetcher, endpoints: &Endpoints) -> Result<IpAddress> {
    let body = fetch_body(fetcher, &endpoints.ip, IP_RESOURCE).await?;
    let reply: IpReply = decode(IP_RESOURCE, &body)?;

    if reply.ip.trim().is_empty() {
        return Err(IssError::parse(IP_RESOURCE, "field `ip` is empty"));
    }

    tracing::debug!("Resolved public IP: {}", reply.ip);
    Ok(reply.ip)
}

pub async fn fetch_coords_by_ip(
    fetcher: &dyn HttpFetcher,
    endpoints: &Endpoints,
    ip: &str,
) -> Result<Coordinates> {
    validate_non_empty_string("ip", ip)?;

    let url = coords_url(&endpoints.geo, ip)?;
    let body = fetch_body(fetcher, url.as_str(), COORDINATES_RESOURCE).await?;
    let reply: GeoReply = decode(COORDINATES_RESOURCE, &body)?;

    tracing::debug!(
        "Resolved coordinates: lat={}, lon={}",
        reply.data.latitude,
        reply.data.longitude
    );
    Ok(reply.data)
}

pub async fn fetch_pass_times(
    fetcher: &dyn HttpFetcher,
    endpoints: &Endpoints,
    coords: Coordinates,
) -> Result<Vec<PassTime>> {
    let url = pass_times_url(&endpoints.pass_times, coords)?;
    let body = fetch_body(fetcher, url.as_str(), PASS_TIMES_RESOURCE).await?;
    let reply: PassTimesReply = decode(PASS_TIMES_RESOURCE, &body)?;

    tracing::debug!("Received {} pass times", reply.response.len());
    Ok(reply.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{Reply, ScriptedFetcher};
    use crate::utils::error::ErrorKind;

    fn endpoints() -> Endpoints {
        Endpoints {
            ip: "http://svc/ip".to_string(),
            geo: "http://svc/geo/".to_string(),
            pass_times: "http://svc/iss-pass.json".to_string(),
        }
    }

    #[test]
    fn test_coords_url_appends_ip_segment() {
        let with_slash = coords_url("https://ipvigilante.com/", "1.2.3.4").unwrap();
        assert_eq!(with_slash.as_str(), "https://ipvigilante.com/1.2.3.4");

        let without_slash = coords_url("http://svc/geo", "1.2.3.4").unwrap();
        assert_eq!(without_slash.as_str(), "http://svc/geo/1.2.3.4");
    }

    #[test]
    fn test_pass_times_url_adds_lat_lon() {
        let coords = Coordinates {
            latitude: 49.27,
            longitude: -123.5,
        };
        let url = pass_times_url("http://api.open-notify.org/iss-pass.json", coords).unwrap();

        assert_eq!(
            url.as_str(),
            "http://api.open-notify.org/iss-pass.json?lat=49.27&lon=-123.5"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let err = coords_url("not a url", "1.2.3.4").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn test_fetch_my_ip() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(200, r#"{"ip":"162.245.144.188"}"#)]);

        let ip = fetch_my_ip(&fetcher, &endpoints()).await.unwrap();

        assert_eq!(ip, "162.245.144.188");
        assert_eq!(fetcher.calls(), vec!["http://svc/ip".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_my_ip_missing_field() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(200, r#"{"address":"1.2.3.4"}"#)]);

        let err = fetch_my_ip(&fetcher, &endpoints()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("ip"));
    }

    #[tokio::test]
    async fn test_fetch_my_ip_empty_value() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(200, r#"{"ip":""}"#)]);

        let err = fetch_my_ip(&fetcher, &endpoints()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_fetch_my_ip_transport_failure() {
        let fetcher = ScriptedFetcher::new(vec![Reply::transport("dns failure")]);

        let err = fetch_my_ip(&fetcher, &endpoints()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_fetch_coords_by_ip() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(
            200,
            r#"{"status":"success","data":{"ipv4":"1.2.3.4","latitude":49.27,"longitude":-123.13,"city_name":"Vancouver"}}"#,
        )]);

        let coords = fetch_coords_by_ip(&fetcher, &endpoints(), "1.2.3.4")
            .await
            .unwrap();

        assert_eq!(
            coords,
            Coordinates {
                latitude: 49.27,
                longitude: -123.13
            }
        );
        assert_eq!(fetcher.calls(), vec!["http://svc/geo/1.2.3.4".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_coords_integer_values_are_accepted() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(
            200,
            r#"{"data":{"latitude":10,"longitude":20}}"#,
        )]);

        let coords = fetch_coords_by_ip(&fetcher, &endpoints(), "1.2.3.4")
            .await
            .unwrap();

        assert_eq!(coords.latitude, 10.0);
        assert_eq!(coords.longitude, 20.0);
    }

    #[tokio::test]
    async fn test_fetch_coords_malformed_nesting() {
        let bodies = [
            r#"{"latitude":10.0,"longitude":20.0}"#,
            r#"{"data":{"latitude":10.0}}"#,
            r#"{"data":{"latitude":"north","longitude":20.0}}"#,
            r#"{"data":null}"#,
        ];

        for body in bodies {
            let fetcher = ScriptedFetcher::new(vec![Reply::ok(200, body)]);
            let err = fetch_coords_by_ip(&fetcher, &endpoints(), "1.2.3.4")
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_fetch_coords_rejects_empty_ip_without_request() {
        let fetcher = ScriptedFetcher::new(vec![]);

        let err = fetch_coords_by_ip(&fetcher, &endpoints(), "")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_pass_times_keeps_service_order() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(
            200,
            r#"{"message":"success","request":{"latitude":10.0,"longitude":20.0},"response":[
                {"risetime":1577840400,"duration":300},
                {"risetime":1577836800,"duration":600}
            ]}"#,
        )]);
        let coords = Coordinates {
            latitude: 10.0,
            longitude: 20.0,
        };

        let passes = fetch_pass_times(&fetcher, &endpoints(), coords)
            .await
            .unwrap();

        assert_eq!(
            passes,
            vec![
                PassTime {
                    risetime: 1577840400,
                    duration: 300
                },
                PassTime {
                    risetime: 1577836800,
                    duration: 600
                },
            ]
        );
        assert_eq!(
            fetcher.calls(),
            vec!["http://svc/iss-pass.json?lat=10&lon=20".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_pass_times_malformed_record() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(
            200,
            r#"{"response":[{"risetime":"soon","duration":600}]}"#,
        )]);
        let coords = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let err = fetch_pass_times(&fetcher, &endpoints(), coords)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_fetch_pass_times_non_200() {
        let fetcher = ScriptedFetcher::new(vec![Reply::ok(503, "try later")]);
        let coords = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };

        let err = fetch_pass_times(&fetcher, &endpoints(), coords)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("try later"));
    }
}
