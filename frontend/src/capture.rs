use gloo_file::File;
use gloo_file::callbacks::FileReader;
use web_sys::HtmlInputElement;

pub const INVALID_FILE_TYPE: &str = "Please upload a valid image file";
pub const READ_FAILURE: &str = "Error reading file";

/// Pulls the first file out of a file input and checks its MIME type before
/// any read is attempted. `Ok(None)` means the picker was dismissed.
pub fn image_from_input(input: &HtmlInputElement) -> Result<Option<File>, String> {
    let file = input.files().and_then(|files| files.item(0));
    // Allow re-selecting the same file later.
    input.set_value("");

    match file {
        Some(file) if file.type_().starts_with("image/") => Ok(Some(File::from(file))),
        Some(_) => Err(INVALID_FILE_TYPE.to_string()),
        None => Ok(None),
    }
}

/// Reads the file into a base64 data URI. The returned reader must be kept
/// alive until the callback fires; dropping it cancels the read, which is how
/// a superseded capture is abandoned.
pub fn read_to_data_uri<F>(file: &File, callback: F) -> FileReader
where
    F: FnOnce(Result<String, String>) + 'static,
{
    gloo_file::callbacks::read_as_data_url(file, move |result| {
        callback(result.map_err(|_| READ_FAILURE.to_string()))
    })
}
