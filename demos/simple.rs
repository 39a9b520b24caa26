use bec_core::translate;

fn main() {
    let bec_data = "
        DIFFICULTY is 3

        begin
            COURSE := q(Introduction to BEC);
            STUDENTS_COUNT := |DIFFICULTY * 1500|;
            ROOM := begin
                BUILDING := q(Main);
                NUMBER := 101;
            end;
        end
    ";

    match translate(bec_data, "example.bec") {
        Ok(result) => {
            let json_output = result.to_json().unwrap();
            println!("Successfully translated BEC to JSON:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to translate BEC: {e:?}");
        }
    }
}
