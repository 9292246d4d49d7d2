//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap Icons. Components refer only to the
//! constants here, so the icon set can be swapped in one place.

use icondata::Icon;

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowReturnLeft as ParentDir,
        BsCaretDownFill as SortDesc, BsCaretUpFill as SortAsc,
        BsCheckCircleFill as Success, BsCloudUpload as UploadFile, BsDownload as Download,
        BsExclamationCircle as Confirm, BsExclamationTriangleFill as Warning,
        BsFileEarmark as File, BsFileEarmarkExcel as FileSheet,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFileEarmarkWord as FileWord,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsFolderPlus as NewFolder,
        BsHddNetwork as Storage, BsInfoCircleFill as Info, BsLink45deg as Link,
        BsMarkdown as FileMarkdown, BsPencil as Rename, BsPencilSquare as Edit,
        BsShieldLock as Locked, BsTrash as Delete, BsUpload as UploadDir, BsXCircleFill as Error,
        BsXLg as Close,
    };
}

macro_rules! icon {
    ($name:ident, $icon:ident) => {
        pub const $name: Icon = bootstrap::$icon;
    };
}

icon!(FOLDER, Folder);
icon!(PARENT_DIR, ParentDir);
icon!(LINK, Link);
icon!(FILE, File);
icon!(FILE_TEXT, FileText);
icon!(FILE_WORD, FileWord);
icon!(FILE_SHEET, FileSheet);
icon!(FILE_IMAGE, FileImage);
icon!(FILE_MARKDOWN, FileMarkdown);
icon!(FILE_PDF, FilePdf);
icon!(FILE_ARCHIVE, FileArchive);
icon!(NEW_FOLDER, NewFolder);
icon!(UPLOAD_FILE, UploadFile);
icon!(UPLOAD_DIR, UploadDir);
icon!(REFRESH, Refresh);
icon!(DELETE, Delete);
icon!(DOWNLOAD, Download);
icon!(EDIT, Edit);
icon!(RENAME, Rename);
icon!(SORT_ASC, SortAsc);
icon!(SORT_DESC, SortDesc);
icon!(CLOSE, Close);
icon!(CONFIRM, Confirm);
icon!(SUCCESS, Success);
icon!(INFO, Info);
icon!(WARNING, Warning);
icon!(ERROR, Error);
icon!(STORAGE, Storage);
icon!(LOCKED, Locked);

/// Icon for a listing entry, chosen from its kind and extension.
pub fn entry_icon(is_dir: bool, is_link: bool, extension: Option<&str>) -> Icon {
    if is_dir {
        return FOLDER;
    }
    if is_link {
        return LINK;
    }
    match extension.unwrap_or_default() {
        "doc" | "docx" => FILE_WORD,
        "xls" | "xlsx" => FILE_SHEET,
        "bmp" | "jpg" | "jpeg" | "png" | "tif" | "gif" | "pcx" | "tga" | "exif" | "svg"
        | "psd" | "ai" | "webp" => FILE_IMAGE,
        "md" => FILE_MARKDOWN,
        "pdf" => FILE_PDF,
        "txt" => FILE_TEXT,
        "zip" | "gz" | "tar" | "tgz" => FILE_ARCHIVE,
        _ => FILE,
    }
}
