use petclinic_load::error::AppResult;

fn main() -> AppResult<()> {
    petclinic_load::run()
}
