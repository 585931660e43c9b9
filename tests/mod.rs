mod helpers;

#[test]
fn fixtures_are_present_and_readable() {
    for name in ["players_10.csv", "players_132.csv", "bad_level.csv", "empty.csv"] {
        let bytes = helpers::read_fixture(name);
        assert!(bytes.starts_with(b"name,level"), "{name} header");
    }
}
