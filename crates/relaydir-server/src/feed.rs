//! Parser for the upstream relay feed.
//!
//! The feed is comma-delimited with two non-data framing rows (a `*vpn_servers`
//! marker and a `#HostName,...` header) and a trailing `*` marker. Data rows
//! carry exactly 15 fields:
//!
//! ```text
//! HostName,IP,Score,Ping,Speed,CountryLong,CountryShort,NumVpnSessions,
//! Uptime,TotalUsers,TotalTraffic,LogType,Operator,Message,OpenVPN_ConfigData_Base64
//! ```
//!
//! Rows with any other field count are dropped; a numeric field that fails to
//! parse degrades to 0 rather than discarding the row. Feed order is
//! preserved.
//!
//! Framing rows are recognized by their `*`/`#` prefixes rather than by
//! position, which assumes the upstream keeps marking them that way. The
//! prefix skip tolerates feeds that omit either framing row; a 15-field
//! header line without its `#` prefix would be ingested as a zero-valued
//! record.

use relaydir_persistence::ServerRecord;

const FIELD_COUNT: usize = 15;

fn parse_i32(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

fn parse_i64(field: &str) -> i64 {
    field.trim().parse().unwrap_or(0)
}

/// Ping is parsed at 16-bit width; values outside i16 range degrade to 0
/// like any other malformed numeric field.
fn parse_ping(field: &str) -> i32 {
    field.trim().parse::<i16>().unwrap_or(0) as i32
}

fn record_from_fields(record: &csv::StringRecord) -> ServerRecord {
    ServerRecord {
        host_name: record[0].to_string(),
        ip: record[1].to_string(),
        score: parse_i32(&record[2]),
        ping: parse_ping(&record[3]),
        speed: parse_i64(&record[4]),
        country_name: record[5].to_string(),
        country_code: record[6].to_string(),
        num_vpn_sessions: parse_i32(&record[7]),
        uptime: parse_i64(&record[8]),
        total_users: parse_i32(&record[9]),
        total_traffic: parse_i64(&record[10]),
        log_type: record[11].to_string(),
        operator: record[12].to_string(),
        message: record[13].to_string(),
        open_vpn_config: record[14].to_string(),
    }
}

/// Lazily parses a feed body into server records, preserving feed order.
///
/// Framing rows (starting with `*` or `#`), unreadable rows and rows with a
/// wrong field count are skipped silently; the feed routinely carries them.
pub fn parse(body: &[u8]) -> impl Iterator<Item = ServerRecord> + '_ {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body)
        .into_records()
        .filter_map(|row| row.ok())
        .filter(|record| {
            let first = record.get(0).unwrap_or("");
            !first.starts_with('*') && !first.starts_with('#')
        })
        .filter(|record| record.len() == FIELD_COUNT)
        .map(|record| record_from_fields(&record))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
*vpn_servers
#HostName,IP,Score,Ping,Speed,CountryLong,CountryShort,NumVpnSessions,Uptime,TotalUsers,TotalTraffic,LogType,Operator,Message,OpenVPN_ConfigData_Base64
server1,1.2.3.4,100,10,5000,Japan,JP,5,86400,10,1000,0,op1,,cfg
server2,5.6.7.8,90,20,4000,Japan,JP,3,3600,7,500,0,op2,hello,cfg2
*
";

    #[test]
    fn framing_rows_are_skipped() {
        let records: Vec<_> = parse(SAMPLE.as_bytes()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].host_name, "server1");
        assert_eq!(records[1].host_name, "server2");
    }

    #[test]
    fn fields_land_in_order() {
        let records: Vec<_> = parse(SAMPLE.as_bytes()).collect();
        let r = &records[0];
        assert_eq!(r.ip, "1.2.3.4");
        assert_eq!(r.score, 100);
        assert_eq!(r.ping, 10);
        assert_eq!(r.speed, 5000);
        assert_eq!(r.country_name, "Japan");
        assert_eq!(r.country_code, "JP");
        assert_eq!(r.num_vpn_sessions, 5);
        assert_eq!(r.uptime, 86400);
        assert_eq!(r.total_users, 10);
        assert_eq!(r.total_traffic, 1000);
        assert_eq!(r.log_type, "0");
        assert_eq!(r.operator, "op1");
        assert_eq!(r.message, "");
        assert_eq!(r.open_vpn_config, "cfg");
    }

    #[test]
    fn wrong_field_count_drops_the_row() {
        let body = "a,b,c\nserver1,1.2.3.4,100,10,5000,Japan,JP,5,86400,10,1000,0,op1,,cfg\n";
        let records: Vec<_> = parse(body.as_bytes()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].host_name, "server1");
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let body = "server1,1.2.3.4,oops,99999,not-a-number,Japan,JP,5,86400,10,1000,0,op1,,cfg\n";
        let records: Vec<_> = parse(body.as_bytes()).collect();
        assert_eq!(records.len(), 1);
        // score unparseable, ping overflows the 16-bit width, speed unparseable
        assert_eq!(records[0].score, 0);
        assert_eq!(records[0].ping, 0);
        assert_eq!(records[0].speed, 0);
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert_eq!(parse(b"").count(), 0);
    }

    #[test]
    fn order_is_preserved() {
        let body = "\
c,1.1.1.1,1,1,1,Japan,JP,1,1,1,1,0,o,,x
a,2.2.2.2,1,1,1,Japan,JP,1,1,1,1,0,o,,x
b,3.3.3.3,1,1,1,Japan,JP,1,1,1,1,0,o,,x
";
        let hosts: Vec<String> = parse(body.as_bytes()).map(|r| r.host_name).collect();
        assert_eq!(hosts, vec!["c", "a", "b"]);
    }
}
